//! Boilerplate source skeletons.
//!
//! Each constant is the full text of one generated C# file with
//! `{{NAMESPACE}}` standing in for the solution's namespace root. The
//! skeletons are fixed; only the namespace varies per run. Where a file
//! exists in both styles, the two variants differ in namespaces and in the
//! constraint/dependency they are bound to (N-Layer binds to the `IEntity`
//! marker and the concrete `BaseService`, Onion binds to `BaseEntity` and
//! the `IService` interface).

// ── N-Layer ──────────────────────────────────────────────────────────────────

pub const NLAYER_ENTITY_MARKER: &str = r#"namespace {{NAMESPACE}}.Core.Interfaces
{
    public interface IEntity
    {
        int Id { get; set; }
    }
}
"#;

pub const NLAYER_REPOSITORY_CONTRACT: &str = r#"using System.Linq.Expressions;

namespace {{NAMESPACE}}.Core.Interfaces
{
    public interface IRepository<T> where T : class, IEntity
    {
        Task<T> GetByIdAsync(int id);
        Task<IEnumerable<T>> GetAllAsync();
        Task<IEnumerable<T>> FindAsync(Expression<Func<T, bool>> predicate);
        Task AddAsync(T entity);
        Task UpdateAsync(T entity);
        Task DeleteAsync(T entity);
    }
}
"#;

pub const NLAYER_BASE_ENTITY: &str = r#"using {{NAMESPACE}}.Core.Interfaces;

namespace {{NAMESPACE}}.Entities.Models
{
    public abstract class BaseEntity : IEntity
    {
        public int Id { get; set; }
        public DateTime CreatedAt { get; set; }
        public DateTime? UpdatedAt { get; set; }
    }
}
"#;

pub const NLAYER_BASE_REPOSITORY: &str = r#"using Microsoft.EntityFrameworkCore;
using {{NAMESPACE}}.Core.Interfaces;
using System.Linq.Expressions;

namespace {{NAMESPACE}}.DataAccess.Repositories
{
    public class BaseRepository<T> : IRepository<T> where T : class, IEntity
    {
        protected readonly DbContext _context;
        protected readonly DbSet<T> _dbSet;

        public BaseRepository(DbContext context)
        {
            _context = context;
            _dbSet = context.Set<T>();
        }

        public virtual async Task<T> GetByIdAsync(int id)
        {
            return await _dbSet.FindAsync(id);
        }

        public virtual async Task<IEnumerable<T>> GetAllAsync()
        {
            return await _dbSet.ToListAsync();
        }

        public virtual async Task<IEnumerable<T>> FindAsync(Expression<Func<T, bool>> predicate)
        {
            return await _dbSet.Where(predicate).ToListAsync();
        }

        public virtual async Task AddAsync(T entity)
        {
            await _dbSet.AddAsync(entity);
            await _context.SaveChangesAsync();
        }

        public virtual async Task UpdateAsync(T entity)
        {
            _dbSet.Update(entity);
            await _context.SaveChangesAsync();
        }

        public virtual async Task DeleteAsync(T entity)
        {
            _dbSet.Remove(entity);
            await _context.SaveChangesAsync();
        }
    }
}
"#;

pub const NLAYER_BASE_SERVICE: &str = r#"using {{NAMESPACE}}.Core.Interfaces;

namespace {{NAMESPACE}}.Business.Services
{
    public abstract class BaseService<T> where T : class, IEntity
    {
        protected readonly IRepository<T> _repository;

        protected BaseService(IRepository<T> repository)
        {
            _repository = repository;
        }

        public virtual async Task<T> GetByIdAsync(int id)
        {
            return await _repository.GetByIdAsync(id);
        }

        public virtual async Task<IEnumerable<T>> GetAllAsync()
        {
            return await _repository.GetAllAsync();
        }

        public virtual async Task AddAsync(T entity)
        {
            await _repository.AddAsync(entity);
        }

        public virtual async Task UpdateAsync(T entity)
        {
            await _repository.UpdateAsync(entity);
        }

        public virtual async Task DeleteAsync(T entity)
        {
            await _repository.DeleteAsync(entity);
        }
    }
}
"#;

pub const NLAYER_BASE_CONTROLLER: &str = r#"using Microsoft.AspNetCore.Mvc;
using {{NAMESPACE}}.Core.Interfaces;
using {{NAMESPACE}}.Business.Services;

namespace {{NAMESPACE}}.API.Controllers
{
    [ApiController]
    [Route("api/[controller]")]
    public abstract class BaseController<T> : ControllerBase where T : class, IEntity
    {
        protected readonly BaseService<T> _service;

        protected BaseController(BaseService<T> service)
        {
            _service = service;
        }

        [HttpGet]
        public virtual async Task<IActionResult> GetAll()
        {
            var entities = await _service.GetAllAsync();
            return Ok(entities);
        }

        [HttpGet("{id}")]
        public virtual async Task<IActionResult> GetById(int id)
        {
            var entity = await _service.GetByIdAsync(id);
            if (entity == null)
                return NotFound();

            return Ok(entity);
        }

        [HttpPost]
        public virtual async Task<IActionResult> Create([FromBody] T entity)
        {
            await _service.AddAsync(entity);
            return CreatedAtAction(nameof(GetById), new { id = entity.Id }, entity);
        }

        [HttpPut("{id}")]
        public virtual async Task<IActionResult> Update(int id, [FromBody] T entity)
        {
            if (id != entity.Id)
                return BadRequest();

            await _service.UpdateAsync(entity);
            return NoContent();
        }

        [HttpDelete("{id}")]
        public virtual async Task<IActionResult> Delete(int id)
        {
            var entity = await _service.GetByIdAsync(id);
            if (entity == null)
                return NotFound();

            await _service.DeleteAsync(entity);
            return NoContent();
        }
    }
}
"#;

// ── Onion ────────────────────────────────────────────────────────────────────

pub const ONION_BASE_ENTITY: &str = r#"namespace {{NAMESPACE}}.Domain.Entities
{
    public abstract class BaseEntity
    {
        public int Id { get; set; }
        public DateTime CreatedAt { get; set; }
        public DateTime? UpdatedAt { get; set; }
    }
}
"#;

pub const ONION_REPOSITORY_CONTRACT: &str = r#"using System.Linq.Expressions;
using {{NAMESPACE}}.Domain.Entities;

namespace {{NAMESPACE}}.Domain.Interfaces
{
    public interface IRepository<T> where T : BaseEntity
    {
        Task<T> GetByIdAsync(int id);
        Task<IEnumerable<T>> GetAllAsync();
        Task<IEnumerable<T>> FindAsync(Expression<Func<T, bool>> predicate);
        Task AddAsync(T entity);
        Task UpdateAsync(T entity);
        Task DeleteAsync(T entity);
    }
}
"#;

pub const ONION_SERVICE_CONTRACT: &str = r#"using {{NAMESPACE}}.Domain.Entities;

namespace {{NAMESPACE}}.Application.Interfaces
{
    public interface IService<T> where T : BaseEntity
    {
        Task<T> GetByIdAsync(int id);
        Task<IEnumerable<T>> GetAllAsync();
        Task AddAsync(T entity);
        Task UpdateAsync(T entity);
        Task DeleteAsync(T entity);
    }
}
"#;

pub const ONION_BASE_SERVICE: &str = r#"using {{NAMESPACE}}.Application.Interfaces;
using {{NAMESPACE}}.Domain.Entities;
using {{NAMESPACE}}.Domain.Interfaces;

namespace {{NAMESPACE}}.Application.Services
{
    public abstract class BaseService<T> : IService<T> where T : BaseEntity
    {
        protected readonly IRepository<T> _repository;

        protected BaseService(IRepository<T> repository)
        {
            _repository = repository;
        }

        public virtual async Task<T> GetByIdAsync(int id)
        {
            return await _repository.GetByIdAsync(id);
        }

        public virtual async Task<IEnumerable<T>> GetAllAsync()
        {
            return await _repository.GetAllAsync();
        }

        public virtual async Task AddAsync(T entity)
        {
            await _repository.AddAsync(entity);
        }

        public virtual async Task UpdateAsync(T entity)
        {
            await _repository.UpdateAsync(entity);
        }

        public virtual async Task DeleteAsync(T entity)
        {
            await _repository.DeleteAsync(entity);
        }
    }
}
"#;

pub const ONION_BASE_REPOSITORY: &str = r#"using Microsoft.EntityFrameworkCore;
using {{NAMESPACE}}.Domain.Entities;
using {{NAMESPACE}}.Domain.Interfaces;
using System.Linq.Expressions;

namespace {{NAMESPACE}}.Persistence.Repositories
{
    public class BaseRepository<T> : IRepository<T> where T : BaseEntity
    {
        protected readonly DbContext _context;
        protected readonly DbSet<T> _dbSet;

        public BaseRepository(DbContext context)
        {
            _context = context;
            _dbSet = context.Set<T>();
        }

        public virtual async Task<T> GetByIdAsync(int id)
        {
            return await _dbSet.FindAsync(id);
        }

        public virtual async Task<IEnumerable<T>> GetAllAsync()
        {
            return await _dbSet.ToListAsync();
        }

        public virtual async Task<IEnumerable<T>> FindAsync(Expression<Func<T, bool>> predicate)
        {
            return await _dbSet.Where(predicate).ToListAsync();
        }

        public virtual async Task AddAsync(T entity)
        {
            await _dbSet.AddAsync(entity);
            await _context.SaveChangesAsync();
        }

        public virtual async Task UpdateAsync(T entity)
        {
            _dbSet.Update(entity);
            await _context.SaveChangesAsync();
        }

        public virtual async Task DeleteAsync(T entity)
        {
            _dbSet.Remove(entity);
            await _context.SaveChangesAsync();
        }
    }
}
"#;

pub const ONION_DATA_CONTEXT: &str = r#"using Microsoft.EntityFrameworkCore;
using {{NAMESPACE}}.Domain.Entities;

namespace {{NAMESPACE}}.Persistence.Contexts
{
    public class ApplicationDbContext : DbContext
    {
        public ApplicationDbContext(DbContextOptions<ApplicationDbContext> options)
            : base(options)
        {
        }

        protected override void OnModelCreating(ModelBuilder modelBuilder)
        {
            base.OnModelCreating(modelBuilder);
            // Add your entity configurations here
        }
    }
}
"#;

pub const ONION_EMAIL_SERVICE: &str = r#"namespace {{NAMESPACE}}.Infrastructure.Services
{
    public interface IEmailService
    {
        Task SendEmailAsync(string to, string subject, string body);
    }

    public class EmailService : IEmailService
    {
        public async Task SendEmailAsync(string to, string subject, string body)
        {
            // Implement email sending logic
            await Task.CompletedTask;
        }
    }
}
"#;

pub const ONION_BASE_CONTROLLER: &str = r#"using Microsoft.AspNetCore.Mvc;
using {{NAMESPACE}}.Domain.Entities;
using {{NAMESPACE}}.Application.Services;
using {{NAMESPACE}}.Application.Interfaces;

namespace {{NAMESPACE}}.API.Controllers
{
    [ApiController]
    [Route("api/[controller]")]
    public abstract class BaseController<T> : ControllerBase where T : BaseEntity
    {
        protected readonly IService<T> _service;

        protected BaseController(IService<T> service)
        {
            _service = service;
        }

        [HttpGet]
        public virtual async Task<IActionResult> GetAll()
        {
            var entities = await _service.GetAllAsync();
            return Ok(entities);
        }

        [HttpGet("{id}")]
        public virtual async Task<IActionResult> GetById(int id)
        {
            var entity = await _service.GetByIdAsync(id);
            if (entity == null)
                return NotFound();

            return Ok(entity);
        }

        [HttpPost]
        public virtual async Task<IActionResult> Create([FromBody] T entity)
        {
            await _service.AddAsync(entity);
            return CreatedAtAction(nameof(GetById), new { id = entity.Id }, entity);
        }

        [HttpPut("{id}")]
        public virtual async Task<IActionResult> Update(int id, [FromBody] T entity)
        {
            if (id != entity.Id)
                return BadRequest();

            await _service.UpdateAsync(entity);
            return NoContent();
        }

        [HttpDelete("{id}")]
        public virtual async Task<IActionResult> Delete(int id)
        {
            var entity = await _service.GetByIdAsync(id);
            if (entity == null)
                return NotFound();

            await _service.DeleteAsync(entity);
            return NoContent();
        }
    }
}
"#;

//! Template rendering: (style, boilerplate id, namespace root) → file.
//!
//! Pure and deterministic — no I/O, no side effects. The renderer consumes a
//! namespace root it is handed (derivation from the project folder belongs
//! to the filesystem port); it never inspects paths itself.

mod templates;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::layer::Boilerplate;
use crate::domain::style::ArchitectureStyle;

/// One rendered boilerplate file: a path relative to the project directory
/// plus its full source text. Writing twice to the same path overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Variable substitution context for template rendering.
///
/// Variables are `SCREAMING_SNAKE_CASE` and referenced as `{{NAME}}` inside
/// the skeletons. Only `NAMESPACE` is built in today; custom variables can
/// be layered on with [`Self::with_variable`].
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a context for the given namespace root (e.g. `Acme`).
    pub fn new(namespace_root: impl Into<String>) -> Self {
        let mut variables = HashMap::new();
        variables.insert("NAMESPACE".to_string(), namespace_root.into());
        Self { variables }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is; the skeletons in `templates.rs`
    /// only use variables this context defines, which `render` tests assert.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Render one boilerplate file for a style.
///
/// Total over all `(style, kind)` pairs: ids that only one style's registry
/// uses (e.g. [`Boilerplate::DataContext`]) render their owning style's
/// variant regardless of `style`, so which combinations actually occur is
/// governed solely by the registry tables.
pub fn render(style: ArchitectureStyle, kind: Boilerplate, ctx: &RenderContext) -> RenderedFile {
    use ArchitectureStyle::{NLayer, Onion};
    use self::templates as t;

    let (path, skeleton) = match (kind, style) {
        (Boilerplate::EntityMarker, _) => ("Interfaces/IEntity.cs", t::NLAYER_ENTITY_MARKER),
        (Boilerplate::RepositoryContract, NLayer) => {
            ("Interfaces/IRepository.cs", t::NLAYER_REPOSITORY_CONTRACT)
        }
        (Boilerplate::RepositoryContract, Onion) => {
            ("Interfaces/IRepository.cs", t::ONION_REPOSITORY_CONTRACT)
        }
        (Boilerplate::BaseEntity, NLayer) => ("Models/BaseEntity.cs", t::NLAYER_BASE_ENTITY),
        (Boilerplate::BaseEntity, Onion) => ("Entities/BaseEntity.cs", t::ONION_BASE_ENTITY),
        (Boilerplate::ServiceContract, _) => ("Interfaces/IService.cs", t::ONION_SERVICE_CONTRACT),
        (Boilerplate::BaseService, NLayer) => ("Services/BaseService.cs", t::NLAYER_BASE_SERVICE),
        (Boilerplate::BaseService, Onion) => ("Services/BaseService.cs", t::ONION_BASE_SERVICE),
        (Boilerplate::BaseRepository, NLayer) => {
            ("Repositories/BaseRepository.cs", t::NLAYER_BASE_REPOSITORY)
        }
        (Boilerplate::BaseRepository, Onion) => {
            ("Repositories/BaseRepository.cs", t::ONION_BASE_REPOSITORY)
        }
        (Boilerplate::DataContext, _) => {
            ("Contexts/ApplicationDbContext.cs", t::ONION_DATA_CONTEXT)
        }
        (Boilerplate::EmailService, _) => ("Services/EmailService.cs", t::ONION_EMAIL_SERVICE),
        (Boilerplate::BaseController, NLayer) => {
            ("Controllers/BaseController.cs", t::NLAYER_BASE_CONTROLLER)
        }
        (Boilerplate::BaseController, Onion) => {
            ("Controllers/BaseController.cs", t::ONION_BASE_CONTROLLER)
        }
    };

    RenderedFile {
        path: PathBuf::from(path),
        content: ctx.render(skeleton),
    }
}

/// Render every boilerplate file a layer owns, in registry order.
pub fn render_layer(
    style: ArchitectureStyle,
    boilerplate: &[Boilerplate],
    ctx: &RenderContext,
) -> Vec<RenderedFile> {
    boilerplate
        .iter()
        .map(|kind| render(style, *kind, ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry;

    #[test]
    fn context_substitutes_namespace() {
        let ctx = RenderContext::new("Acme");
        assert_eq!(ctx.get("NAMESPACE"), Some("Acme"));
        assert_eq!(
            ctx.render("namespace {{NAMESPACE}}.Core"),
            "namespace Acme.Core"
        );
    }

    #[test]
    fn context_custom_variables() {
        let ctx = RenderContext::new("Acme").with_variable("AUTHOR", "Alice");
        assert_eq!(ctx.render("{{AUTHOR}}"), "Alice");
    }

    #[test]
    fn repeated_placeholders_all_replaced() {
        let ctx = RenderContext::new("X");
        assert_eq!(ctx.render("{{NAMESPACE}}.{{NAMESPACE}}"), "X.X");
    }

    #[test]
    fn nlayer_repository_contract_is_namespaced() {
        let ctx = RenderContext::new("Acme");
        let file = render(
            ArchitectureStyle::NLayer,
            Boilerplate::RepositoryContract,
            &ctx,
        );
        assert_eq!(file.path, PathBuf::from("Interfaces/IRepository.cs"));
        assert!(file.content.contains("namespace Acme.Core.Interfaces"));
        assert!(file.content.contains("IRepository<T>"));
    }

    #[test]
    fn onion_repository_contract_binds_to_base_entity() {
        let ctx = RenderContext::new("Acme");
        let file = render(
            ArchitectureStyle::Onion,
            Boilerplate::RepositoryContract,
            &ctx,
        );
        assert!(file.content.contains("namespace Acme.Domain.Interfaces"));
        assert!(file.content.contains("where T : BaseEntity"));
    }

    #[test]
    fn base_entity_variants_differ_by_style() {
        let ctx = RenderContext::new("Acme");
        let nlayer = render(ArchitectureStyle::NLayer, Boilerplate::BaseEntity, &ctx);
        let onion = render(ArchitectureStyle::Onion, Boilerplate::BaseEntity, &ctx);

        assert_eq!(nlayer.path, PathBuf::from("Models/BaseEntity.cs"));
        assert!(nlayer.content.contains(": IEntity"));

        assert_eq!(onion.path, PathBuf::from("Entities/BaseEntity.cs"));
        assert!(!onion.content.contains("IEntity"));
        assert!(onion.content.contains("DateTime? UpdatedAt"));
    }

    #[test]
    fn controller_variants_bind_to_different_service_types() {
        let ctx = RenderContext::new("Acme");
        let nlayer = render(ArchitectureStyle::NLayer, Boilerplate::BaseController, &ctx);
        let onion = render(ArchitectureStyle::Onion, Boilerplate::BaseController, &ctx);

        assert!(nlayer.content.contains("BaseService<T> _service"));
        assert!(onion.content.contains("IService<T> _service"));
        // Both expose the five standard verbs.
        for verb in ["GetAll", "GetById", "Create", "Update", "Delete"] {
            assert!(nlayer.content.contains(verb), "nlayer missing {verb}");
            assert!(onion.content.contains(verb), "onion missing {verb}");
        }
        // Controller route attribute survives rendering intact.
        assert!(nlayer.content.contains(r#"[Route("api/[controller]")]"#));
        assert!(nlayer.content.contains(r#"[HttpGet("{id}")]"#));
    }

    #[test]
    fn no_unresolved_placeholders_in_any_registry_combination() {
        let ctx = RenderContext::new("Acme");
        for style in ArchitectureStyle::all() {
            for layer in registry::layers_for(style) {
                for file in render_layer(style, layer.boilerplate, &ctx) {
                    assert!(
                        !file.content.contains("{{"),
                        "{style} {layer} {}: unresolved placeholder",
                        file.path.display()
                    );
                    assert!(file.content.contains("Acme."), "{}", file.path.display());
                }
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let ctx = RenderContext::new("Acme");
        let a = render(ArchitectureStyle::Onion, Boilerplate::BaseService, &ctx);
        let b = render(ArchitectureStyle::Onion, Boilerplate::BaseService, &ctx);
        assert_eq!(a, b);
    }
}

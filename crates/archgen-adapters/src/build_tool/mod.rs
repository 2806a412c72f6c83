//! Build-tool adapters.

pub mod dotnet;
pub mod recording;

pub use dotnet::DotnetCli;
pub use recording::{RecordingBuildTool, ToolCall};

pub mod environment;
pub mod paths;
pub mod text;

pub use environment::get_claude_dir;
pub use paths::{
    UNKNOWN_PROJECT, decode_project_path, format_path_with_tilde, project_name,
    validate_identifier,
};
pub use text::{sanitize_for_terminal, truncate_with_ellipsis};

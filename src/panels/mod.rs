mod central_panel;
mod drawings_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use drawings_panel::drawings_panel;
pub use tools_panel::tools_panel;

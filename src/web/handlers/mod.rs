//! HTML template rendering handlers for the widget.

mod login;
mod widget;

pub use login::login_form_handler;
pub use widget::widget_handler;

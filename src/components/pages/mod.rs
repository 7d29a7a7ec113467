//! Page containers mounted by the router.

mod application_detail;
mod application_form_list;
mod application_list;
mod form_editor;

pub use application_detail::ApplicationDetailPage;
pub use application_form_list::ApplicationFormListPage;
pub use application_list::ApplicationListPage;
pub use form_editor::FormEditorPage;

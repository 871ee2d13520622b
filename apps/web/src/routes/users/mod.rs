mod editor;
mod edit;
mod list;

pub(crate) use edit::EditUserPage;
pub(crate) use editor::ProfileEditor;
pub(crate) use list::UsersListPage;

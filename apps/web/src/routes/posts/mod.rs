mod create;
mod images;
mod update;

pub(crate) use create::NewPostPage;
pub(crate) use update::UpdatePostPage;

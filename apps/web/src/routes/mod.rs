mod change_password;
mod home;
mod login;
mod not_found;
pub(crate) mod paths;
mod posts;
mod profile;
mod register;
mod users;

pub(crate) use change_password::ChangePasswordPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use posts::{NewPostPage, UpdatePostPage};
pub(crate) use profile::ProfilePage;
pub(crate) use register::RegisterPage;
pub(crate) use users::{EditUserPage, UsersListPage};

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Routes},
    params::Params,
    path,
};

/// `:id` segment shared by the edit routes.
#[derive(Params, PartialEq, Clone)]
pub(crate) struct IdParams {
    pub id: Option<u64>,
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/home") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/users") view=UsersListPage />
            <Route path=path!("/update/:id") view=EditUserPage />
            <Route path=path!("/post") view=NewPostPage />
            <Route path=path!("/postUpdate/:id") view=UpdatePostPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/changePassword") view=ChangePasswordPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

mod dashboard;
mod forgot_password;
mod home;
mod login;
mod not_found;
mod register;
mod verify_email;

pub(crate) use dashboard::DashboardPage;
pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/reset-password") view=ForgotPasswordPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

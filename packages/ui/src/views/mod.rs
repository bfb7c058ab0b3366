mod login_landing;
pub use login_landing::LoginLanding;

mod register;
pub use register::RegisterView;

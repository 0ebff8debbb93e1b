mod signup;
pub use signup::SignUp;

mod signin;
pub use signin::SignIn;

mod dashboard;
pub use dashboard::Dashboard;

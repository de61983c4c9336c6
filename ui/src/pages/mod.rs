pub mod forgot_password;
pub mod home;
pub mod login;
pub mod set_password;
pub mod signup;

pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use set_password::SetPasswordPage;
pub use signup::SignupPage;

/// Classes shared by the primary submit buttons.
const SUBMIT_BUTTON: &str = "w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
    px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
    disabled:opacity-50 disabled:cursor-not-allowed font-medium";

const CARD: &str = "bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 space-y-4";

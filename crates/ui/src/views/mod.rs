mod about;
mod admin;
mod contact;
mod datasheet;
mod features;
mod home;
mod login;
mod profile;
mod quiz;
mod register;
mod state;
mod upload;

pub use about::AboutView;
pub use admin::AdminView;
pub use contact::ContactView;
pub use datasheet::DataSheetView;
pub use features::FeaturesView;
pub use home::HomeView;
pub use login::LoginView;
pub use profile::ProfileView;
pub use quiz::QuizView;
pub use register::RegisterView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use upload::UploadView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

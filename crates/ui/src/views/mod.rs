mod home;
mod playground;
mod quiz;
mod workbench;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use playground::PlaygroundView;
pub use quiz::QuizView;
pub use workbench::WorkbenchView;

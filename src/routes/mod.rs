mod campaigns;
mod dashboard;
mod drafts;
mod health_check;
mod login;
mod templates;

pub use campaigns::*;
pub use dashboard::*;
pub use drafts::*;
pub use health_check::*;
pub use login::*;
pub use templates::*;

pub mod config;
pub mod datetime;
pub mod error;
pub mod form;
pub mod http;
pub mod store;
pub mod sync;
pub mod view;

pub use config::SyncConfig;
pub use error::{
  SyncError,
  ValidationError
};
pub use http::{
  ApiRequest,
  Method
};
pub use sync::{
  ListSynchronizer,
  LoadTicket,
  Outcome,
  RowTicket,
  Submission
};
pub use view::{
  ListStatus,
  ListView,
  RowView,
  SelectOption
};

//! Application services for the Noor tracker: the authenticated write path,
//! analytics snapshot assembly, weekly report rendering, and the poll
//! safety net.

pub mod analytics_service;
pub mod refresher;
pub mod report_service;
pub mod tracker_usecase;

pub use analytics_service::{AnalyticsService, AnalyticsSnapshot, MemberActivity};
pub use refresher::{spawn_poll_refresher, DEFAULT_POLL_INTERVAL};
pub use report_service::ReportService;
pub use tracker_usecase::TrackerUsecase;

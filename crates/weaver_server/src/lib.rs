//! Web surface for Story Weaver.
//!
//! Serves the input form, runs the pipeline on submit, and renders the last
//! result of each browser session.
//!
//! # Routes
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /` | Form plus the session's last story |
//! | `POST /weave` | Run the pipeline with the submitted form |
//! | `GET /audio` | The session's narration MP3 |
//! | `GET /health` | Liveness check |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod render;
mod routes;
mod server;
mod session;
mod status;

pub use render::{GalleryImage, PageRenderer, PageView, StoryView, gallery_columns};
pub use routes::{AppState, create_router};
pub use server::serve;
pub use session::{DEFAULT_MAX_SESSIONS, SESSION_COOKIE, SessionStore, session_id_from_cookies};
pub use status::{Notice, NoticeLevel, StatusLog, StatusStep};

use std::path::PathBuf;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Serve the files in `dir` for every path no api route matched. Unknown
/// paths get `index.html` so the client side router can take over.
pub fn add(router: Router<()>, dir: PathBuf) -> Router<()> {
    let index = ServeFile::new(dir.join("index.html"));
    router.fallback_service(ServeDir::new(dir).fallback(index))
}

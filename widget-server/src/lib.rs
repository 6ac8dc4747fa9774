//! Widget REST 服务
//!
//! 将 `/rest/widget(s)` 路径族映射到应用层的命令与查询：
//!
//! | 方法 | 路径 | 成功 | 失败 |
//! |---|---|---|---|
//! | GET | `/rest/widgets` | 200，数组 | — |
//! | GET | `/rest/widget/{id}` | 200，`Location`、`ETag` | 404 |
//! | POST | `/rest/widget` | 201，`Location`、`ETag` | 400/415/422 |
//! | PUT | `/rest/widget/{id}` | 200，`Location`、`ETag` | 404、412、428 |
//!
//! 版本号以带引号的整数作为 `ETag` 返回，更新时须通过 `If-Match` 回传。
//!
pub mod config;
pub mod error;
pub mod etag;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

//! Delivery Server - 外卖菜品与订单 API
//!
//! # 架构概述
//!
//! - **数据层** (`db`): 内存存储、ID 生成、种子数据
//! - **校验管道** (`pipeline`): 有序、短路的请求校验步骤
//! - **HTTP API** (`api`): 菜品 / 订单接口
//!
//! # 模块结构
//!
//! ```text
//! delivery-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── db/            # 存储和种子数据
//! ├── pipeline/      # 校验管道
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由组装、中间件栈
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误、日志、字段校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod pipeline;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use crate::db::{DishRepository, OrderRepository};
pub use crate::routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the config and initialize logging from it
pub fn setup_environment() -> Config {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____       ___
   / __ \___  / (_)   _____  _______  __
  / / / / _ \/ / / | / / _ \/ ___/ / / /
 / /_/ /  __/ / /| |/ /  __/ /  / /_/ /
/_____/\___/_/_/ |___/\___/_/   \__, /
                               /____/
    "#
    );
}

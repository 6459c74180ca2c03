use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::seed;
use crate::db::{DishRepository, OrderRepository};

/// 服务器状态 - 持有配置和内存存储
///
/// Cloned into every handler through axum `State`; clones share the same
/// stores. A handler holds a store lock for one validate-then-mutate
/// sequence and never across an `.await`.
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | dishes | Arc<RwLock<DishRepository>> | 菜品存储 |
/// | orders | Arc<RwLock<OrderRepository>> | 订单存储 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub dishes: Arc<RwLock<DishRepository>>,
    pub orders: Arc<RwLock<OrderRepository>>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, dishes: DishRepository, orders: OrderRepository) -> Self {
        Self {
            config,
            dishes: Arc::new(RwLock::new(dishes)),
            orders: Arc::new(RwLock::new(orders)),
        }
    }

    /// 初始化服务器状态
    ///
    /// Loads the seed files named in the config. A configured seed that
    /// cannot be read or parsed is a start-up failure.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let dishes = seed::load_dishes(config.dishes_seed.as_deref()).await?;
        let orders = seed::load_orders(config.orders_seed.as_deref()).await?;
        Ok(Self::new(config.clone(), dishes, orders))
    }
}

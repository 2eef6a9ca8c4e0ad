//! 预订核心 - 预订准入与餐厅匹配规则引擎
//!
//! # 模块结构
//!
//! - [`party`] - 解析 owner + invitees 为人数和饮食限制集合
//! - [`availability`] - 时间冲突检测 (食客 / 桌台)
//! - [`search`] - 按饮食限制、容量和时间匹配餐厅
//! - [`admission`] - 创建预订的线性检查序列
//! - [`error`] - 业务错误枚举 (稳定错误码)
//!
//! 所有函数都显式接收 `&SqlitePool`，无共享可变状态。
//! 检查与写入之间没有跨请求的事务：两个并发的同桌同时段请求
//! 可能都通过检查并都写入成功。

pub mod admission;
pub mod availability;
pub mod error;
pub mod party;
pub mod search;

pub use admission::{CreateReservationRequest, create_reservation};
pub use availability::{check_party_availability, check_table_availability};
pub use error::{BookingError, BookingResult};
pub use party::{Party, PartyQuery, resolve_party};
pub use search::{RestaurantMatch, SearchQuery, find_available_restaurants};

pub mod cart;
pub mod order;
pub mod queue;
pub mod history;
pub mod sales;

pub use cart::{Cart, CartItem};
pub use order::{Customer, Order, OrderStatus};
pub use queue::OrderQueue;
pub use history::ActionHistory;
pub use sales::SalesMatrix;

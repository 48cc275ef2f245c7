pub mod datastructures;
pub mod preliminary;
pub mod tab_draw;

pub use datastructures::DrawTable;
pub use preliminary::random_pairing;
pub use tab_draw::{draw_order_from_tab, rank_adjacent_pairing, DrawOrder};

mod statistic;
pub use statistic::Statistic;

pub mod blocks;
pub mod indicators;
pub mod numbers;
pub mod sector_data;

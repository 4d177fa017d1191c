pub mod berg;
pub mod fried;
pub mod gds15;
pub mod meem;
pub mod sit_and_reach;
pub mod strength;
pub mod tug;

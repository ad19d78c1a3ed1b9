pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_7;
pub mod day_11;
pub mod day_13;
pub mod day_16;
pub mod day_17;

pub mod day_1;

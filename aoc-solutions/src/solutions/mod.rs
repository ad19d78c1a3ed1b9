pub mod year_2019;
pub mod year_2020;

pub mod bingo_sort;

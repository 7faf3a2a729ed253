pub mod merge_sort;

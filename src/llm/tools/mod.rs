pub mod patent_search;

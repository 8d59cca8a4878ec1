// UI Module
// Command-line front end: collects parameters, calls the library, prints results

pub mod cli;

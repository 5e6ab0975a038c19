use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "line.pest"]
pub struct LineParser;

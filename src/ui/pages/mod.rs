// Pages
// One module per route

pub mod mixnode_detail;
pub mod mixnode_list;

//! Word indexing and scanning: the query lookup table and the rolling
//! window iterator shared by table construction and subject scans.

pub mod lookup;
pub mod scan;

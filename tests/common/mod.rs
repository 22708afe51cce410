use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE_CSV: &str = "\
Customer_ID,Region,Total_Revenue,Quantity,Cost,Category,Product_Name
C001,North,1200.50,3,700.00,Electronics,Phone
C002,South,450.00,5,200.00,Home,Lamp
C003,North,80.25,1,30.00,Home,Mug
C001,East,2300.00,2,1500.00,Electronics,Laptop
C004,South,99.99,0,40.00,Toys,Kite
C005,West,640.00,8,320.00,Toys,Puzzle
";

/// Write CSV content to a temp file that lives as long as the handle
pub fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

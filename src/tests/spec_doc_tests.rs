use crate::spec_doc;
use crate::tests::test_output_dir;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_workbook_file() {
        let dir = test_output_dir("spec_doc");
        let output = dir.join("specification.xlsx");

        spec_doc::generate(output.to_str().unwrap(), "no_such_asset_base")
            .expect("Workbook generation should succeed without assets");

        let metadata = std::fs::metadata(&output).expect("Workbook file should exist");
        assert!(metadata.len() > 0, "Workbook should not be empty");
    }

    #[test]
    fn test_creates_missing_output_directory() {
        let dir = test_output_dir("spec_doc_nested");
        let output = dir.join("deep").join("nested").join("specification.xlsx");

        spec_doc::generate(output.to_str().unwrap(), "no_such_asset_base")
            .expect("Generation should create parent directories");

        assert!(output.exists());
    }
}

//! Shared fixtures for record codec tests


/// A well-formed dose-response line for container `container`
pub fn dose_line(container: &str, well: &str) -> String {
    [
        container,
        well,
        "dose",
        "ACT-078573",
        "T0001",
        "42",
        "compound",
        "3",
        "1",
        "0.5",
        "2.0",
        "grp",
        "IC50",
        "12.5",
    ]
    .join("\t")
}

/// A well-formed HCS line with the given measurement tail
pub fn hcs_line(container: &str, values: &[&str]) -> String {
    let mut fields = vec![
        container,
        "B03",
        "1",
        "2",
        "0.5",
        "obj-17",
        "120",
        "340",
        "15.06.2021 08:15:30,250 +0200",
    ];
    fields.extend_from_slice(values);
    fields.join("\t")
}

//! Variables touched (and deliberately not touched) in a CICE restart file.

/// State variables set to zero, in the order they appear in [`NCAP2_EXPR`].
pub const ZERO_SET: &[&str] = &[
    "aicen",
    "vicen",
    "vsnon",
    "uvel",
    "vvel",
    "Tsfcn",
    "qice001",
    "qice002",
    "qice003",
    "qice004",
    "qsno001",
    "sice001",
    "sice002",
    "sice003",
    "sice004",
    "stress12_1",
    "stress12_2",
    "stress12_3",
    "stress12_4",
    "stressm_1",
    "stressm_2",
    "stressm_3",
    "stressm_4",
    "stressp_1",
    "stressp_2",
    "stressp_3",
    "stressp_4",
    "strocnxT",
    "strocnyT",
    "swidf",
    "swidr",
    "swvdf",
    "swvdr",
];

/// Grid mask and scale-factor metadata, which must come through untouched.
pub const PRESERVED: &[&str] = &["iceumask", "scale_factor"];

/// Variables dumped by the inspector when verification is requested.
pub const VERIFY_VARIABLES: &[&str] = &["aicen", "uvel", "vvel", "iceumask", "scale_factor"];

/// ncap2 script assigning zero to every variable in [`ZERO_SET`].
pub const NCAP2_EXPR: &str = "aicen=0; vicen=0; vsnon=0;
uvel=0; vvel=0;
Tsfcn=0;
qice001=0; qice002=0; qice003=0; qice004=0;
qsno001=0;
sice001=0; sice002=0; sice003=0; sice004=0;
stress12_1=0; stress12_2=0; stress12_3=0; stress12_4=0;
stressm_1=0; stressm_2=0; stressm_3=0; stressm_4=0;
stressp_1=0; stressp_2=0; stressp_3=0; stressp_4=0;
strocnxT=0; strocnyT=0;
swidf=0; swidr=0; swvdf=0; swvdr=0;";

/// Comma-joined variable list in the form `ncks -v` expects.
pub fn verify_list() -> String {
    VERIFY_VARIABLES.join(",")
}

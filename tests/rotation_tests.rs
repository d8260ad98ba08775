use residency_roster::{Location, canonicalize, classify_location};

#[test]
fn internal_codes_map_to_display_names() {
    assert_eq!(canonicalize("TGH-6 Consults"), "TGH Senior");
    assert_eq!(canonicalize("TGH-5 S&G"), "Jarstad / Agi");
    assert_eq!(canonicalize("VA-4/VA Surgery"), "VA A (McDowell)");
    assert_eq!(canonicalize("VA-5/VA Clinic"), "VA B (Mercer)");
}

#[test]
fn unmapped_names_pass_through_trimmed() {
    assert_eq!(canonicalize("  Neuro "), "Neuro");
    assert_eq!(canonicalize("Retina"), "Retina");
    // Already-canonical names stay stable under a second pass.
    assert_eq!(canonicalize("VA A (McDowell)"), "VA A (McDowell)");
}

#[test]
fn facility_classification() {
    assert_eq!(classify_location("Neuro"), Location::Both);
    assert_eq!(classify_location("RCG"), Location::Va);
    assert_eq!(classify_location("Plastics"), Location::Va);
    assert_eq!(classify_location("VA-4/VA Surgery"), Location::Va);
    assert_eq!(classify_location("VA B (Mercer)"), Location::Va);
    assert_eq!(classify_location("TGH Senior"), Location::Tgh);
    assert_eq!(classify_location("Retina"), Location::Tgh);
}

#[test]
fn neuro_outranks_facility_markers() {
    assert_eq!(classify_location("VA Neuro Clinic"), Location::Both);
    assert_eq!(classify_location("neuro-ophthalmology"), Location::Both);
}

//! UGC avatar table tests.

use adcraft::creative::{
    avatar_visuals, avatar_visuals_for_label, UgcAvatar, DEFAULT_AVATAR_VISUALS,
};

#[test]
fn every_avatar_has_a_distinct_description() {
    let mut seen = Vec::new();
    for avatar in UgcAvatar::ALL {
        let visuals = avatar_visuals(avatar);
        assert!(!visuals.is_empty(), "{avatar} has no visuals");
        assert_ne!(visuals, DEFAULT_AVATAR_VISUALS);
        assert!(!seen.contains(&visuals));
        seen.push(visuals);
    }
}

#[test]
fn labels_parse_loosely() {
    assert_eq!("Gen Z Creator".parse(), Ok(UgcAvatar::GenZCreator));
    assert_eq!("gen_z_creator".parse(), Ok(UgcAvatar::GenZCreator));
    assert_eq!("millennial-mom".parse(), Ok(UgcAvatar::MillennialMom));
    assert_eq!("DOCTOR".parse(), Ok(UgcAvatar::Doctor));
}

#[test]
fn lookup_by_label_falls_back_to_default() {
    assert!(avatar_visuals_for_label("Doctor").contains("stethoscope"));
    assert_eq!(avatar_visuals_for_label("Astronaut"), DEFAULT_AVATAR_VISUALS);
    assert_eq!(avatar_visuals_for_label(""), DEFAULT_AVATAR_VISUALS);
}

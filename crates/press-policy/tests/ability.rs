//! Capability scenarios per kind of principal

use press_policy::{Ability, Target};
use press_types::{
    Action, FileSet, Grant, Monograph, Press, Principal, PrincipalId, RoleKind, RoleRecord,
    Section, SubBrand, Visibility,
};

struct World {
    press: Press,
    sub_brand: SubBrand,
    monograph: Monograph,
    section: Section,
    file_set: FileSet,
}

fn world(creator: &PrincipalId, visibility: Visibility) -> World {
    let press = Press::new("umich");
    let sub_brand = SubBrand::new(press.id.clone(), "Imprint");
    let monograph = Monograph::new(press.subdomain.clone())
        .with_creator(creator.clone())
        .with_visibility(visibility);
    let section = Section::new()
        .with_creator(creator.clone())
        .with_visibility(visibility);
    let file_set = FileSet::new()
        .with_creator(creator.clone())
        .with_visibility(visibility);
    World {
        press,
        sub_brand,
        monograph,
        section,
        file_set,
    }
}

fn grant(press: &Press, kind: RoleKind) -> Grant {
    Grant::new(press.id.clone(), press.subdomain.clone(), kind)
}

mod platform_admin {
    use super::*;

    #[test]
    fn can_do_everything() {
        let ability = Ability::default();
        let admin_id = PrincipalId::new("root");
        let admin = Principal::platform_admin(admin_id.clone());
        let w = world(&admin_id, Visibility::Private);
        let role = RoleRecord::new(PrincipalId::new("someone"), None, RoleKind::Editor);

        assert!(ability.can(&admin, Action::Create, &Target::Monograph(&Monograph::new("anywhere"))));
        for action in [Action::Publish, Action::Read, Action::Update, Action::Destroy] {
            assert!(ability.can(&admin, action, &Target::Monograph(&w.monograph)));
        }
        for action in [Action::Create, Action::Read, Action::Update, Action::Destroy] {
            assert!(ability.can(&admin, action, &Target::section(&w.section)));
            assert!(ability.can(&admin, action, &Target::file_set(&w.file_set)));
        }
        for action in [Action::Read, Action::Update, Action::Destroy] {
            assert!(ability.can(&admin, action, &Target::Role(&role)));
        }
        assert!(ability.can(&admin, Action::Update, &Target::Press(&w.press)));
        assert!(ability.can(&admin, Action::Manage, &Target::SubBrand(&w.sub_brand)));
        assert!(ability.can(&admin, Action::Read, &Target::JobDashboard));
    }

    #[test]
    fn owner_does_not_matter() {
        let ability = Ability::default();
        let admin = Principal::platform_admin(PrincipalId::new("root"));
        let w = world(&PrincipalId::new("another-user"), Visibility::Private);

        for action in [Action::Read, Action::Update, Action::Publish, Action::Destroy] {
            assert!(ability.can(&admin, action, &Target::Monograph(&w.monograph)));
        }
    }
}

mod press_admin {
    use super::*;

    #[test]
    fn presses_and_sub_brands() {
        let ability = Ability::default();
        let my_press = Press::new("umich");
        let other_press = Press::new("psu");
        let my_sub_brand = SubBrand::new(my_press.id.clone(), "My own sub-brand");
        let other_sub_brand = SubBrand::new(other_press.id.clone(), "Someone else's sub-brand");
        let admin = Principal::user(PrincipalId::new("pa")).with_grant(grant(&my_press, RoleKind::Admin));

        assert!(ability.can(&admin, Action::Update, &Target::Press(&my_press)));
        assert!(!ability.can(&admin, Action::Update, &Target::Press(&other_press)));
        assert!(ability.can(&admin, Action::Manage, &Target::SubBrand(&my_sub_brand)));
        assert!(!ability.can(&admin, Action::Manage, &Target::SubBrand(&other_sub_brand)));
        assert!(ability.can(&admin, Action::Read, &Target::SubBrand(&other_sub_brand)));
        assert!(!ability.can(&admin, Action::Read, &Target::JobDashboard));
    }

    #[test]
    fn roles() {
        let ability = Ability::default();
        let my_press = Press::new("umich");
        let other_press = Press::new("psu");
        let admin = Principal::user(PrincipalId::new("pa")).with_grant(grant(&my_press, RoleKind::Admin));

        let my_press_role = RoleRecord::new(PrincipalId::new("u"), Some(my_press.id.clone()), RoleKind::Editor);
        let other_press_role = RoleRecord::new(PrincipalId::new("u"), Some(other_press.id.clone()), RoleKind::Editor);

        for action in [Action::Read, Action::Update, Action::Destroy] {
            assert!(ability.can(&admin, action, &Target::Role(&my_press_role)));
            assert!(!ability.can(&admin, action, &Target::Role(&other_press_role)));
        }
    }

    #[test]
    fn creating_monographs() {
        let ability = Ability::default();
        let my_press = Press::new("umich");
        let admin = Principal::user(PrincipalId::new("pa")).with_grant(grant(&my_press, RoleKind::Admin));

        assert!(ability.can(&admin, Action::Create, &Target::Monograph(&Monograph::new("umich"))));
        assert!(!ability.can(&admin, Action::Create, &Target::Monograph(&Monograph::new("psu"))));
    }

    #[test]
    fn publications_of_own_press_regardless_of_creator() {
        let ability = Ability::default();
        let my_press = Press::new("umich");
        let admin = Principal::user(PrincipalId::new("pa")).with_grant(grant(&my_press, RoleKind::Admin));
        let w = world(&PrincipalId::new("someone-else"), Visibility::Private);
        let section = Target::Section {
            section: &w.section,
            parent: Some(&w.monograph),
        };

        for action in [Action::Read, Action::Update, Action::Destroy] {
            assert!(ability.can(&admin, action, &Target::Monograph(&w.monograph)));
            assert!(ability.can(&admin, action, &section));
        }
        assert!(!ability.can(&admin, Action::Publish, &Target::Monograph(&w.monograph)));
    }
}

mod press_editor {
    use super::*;

    #[test]
    fn reads_but_does_not_manage() {
        let ability = Ability::default();
        let my_press = Press::new("umich");
        let my_sub_brand = SubBrand::new(my_press.id.clone(), "My own sub-brand");
        let editor = Principal::user(PrincipalId::new("ed")).with_grant(grant(&my_press, RoleKind::Editor));
        let monograph_for_my_press = Monograph::new(my_press.subdomain.clone());

        assert!(!ability.can(&editor, Action::Update, &Target::Press(&my_press)));
        assert!(!ability.can(&editor, Action::Create, &Target::Monograph(&monograph_for_my_press)));
        assert!(!ability.can(&editor, Action::Manage, &Target::SubBrand(&my_sub_brand)));
        assert!(ability.can(&editor, Action::Read, &Target::SubBrand(&my_sub_brand)));
        assert!(ability.can(&editor, Action::Read, &Target::Monograph(&monograph_for_my_press)));
    }
}

mod public_user {
    use super::*;

    #[test]
    fn cannot_create() {
        let ability = Ability::default();
        let anon = Principal::anonymous();

        assert!(!ability.can(&anon, Action::Create, &Target::Monograph(&Monograph::new("umich"))));
        assert!(!ability.can(&anon, Action::Create, &Target::section(&Section::new())));
        assert!(!ability.can(&anon, Action::Create, &Target::file_set(&FileSet::new())));
    }

    #[test]
    fn presses() {
        let ability = Ability::default();
        let anon = Principal::anonymous();
        let w = world(&PrincipalId::new("creator"), Visibility::Private);

        assert!(ability.can(&anon, Action::Index, &Target::Presses));
        assert!(ability.can(&anon, Action::Read, &Target::Press(&w.press)));
        assert!(!ability.can(&anon, Action::Update, &Target::Press(&w.press)));
        assert!(!ability.can(&anon, Action::Manage, &Target::SubBrand(&w.sub_brand)));
        assert!(ability.can(&anon, Action::Read, &Target::SubBrand(&w.sub_brand)));
    }

    #[test]
    fn private_things_are_hidden() {
        let ability = Ability::default();
        let anon = Principal::anonymous();
        let w = world(&PrincipalId::new("creator"), Visibility::Private);

        for action in [Action::Read, Action::Publish, Action::Update, Action::Destroy] {
            assert!(!ability.can(&anon, action, &Target::Monograph(&w.monograph)));
        }
        for action in [Action::Read, Action::Update, Action::Destroy] {
            assert!(!ability.can(&anon, action, &Target::section(&w.section)));
            assert!(!ability.can(&anon, action, &Target::file_set(&w.file_set)));
        }
    }

    #[test]
    fn public_things_are_read_only() {
        let ability = Ability::default();
        let anon = Principal::anonymous();
        let w = world(&PrincipalId::new("creator"), Visibility::Public);

        assert!(ability.can(&anon, Action::Read, &Target::Monograph(&w.monograph)));
        assert!(ability.can(&anon, Action::Read, &Target::section(&w.section)));
        assert!(ability.can(&anon, Action::Read, &Target::file_set(&w.file_set)));
        for action in [Action::Update, Action::Destroy, Action::Publish] {
            assert!(!ability.can(&anon, action, &Target::Monograph(&w.monograph)));
            assert!(!ability.can(&anon, action, &Target::section(&w.section)));
            assert!(!ability.can(&anon, action, &Target::file_set(&w.file_set)));
        }
    }

    #[test]
    fn admin_only_things() {
        let ability = Ability::default();
        let anon = Principal::anonymous();
        let role = RoleRecord::new(PrincipalId::new("u"), None, RoleKind::Admin);

        for action in [Action::Read, Action::Update, Action::Destroy] {
            assert!(!ability.can(&anon, action, &Target::Role(&role)));
        }
        assert!(!ability.can(&anon, Action::Read, &Target::JobDashboard));
    }
}

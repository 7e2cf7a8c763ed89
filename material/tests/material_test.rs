use material::Material;

#[test]
fn builders_keep_other_coefficients() {
    let glass = Material::new(0.05, 0.2, 0.7)
        .with_reflection(0.2)
        .with_refraction(0.9, 1.33)
        .with_absorbance(0.8)
        .with_shininess(40);
    assert_eq!(glass.ambient(), 0.05);
    assert_eq!(glass.diffuse(), 0.2);
    assert_eq!(glass.specular(), 0.7);
    assert_eq!(glass.shininess(), 40);
    assert_eq!(glass.reflective(), 0.2);
    assert_eq!(glass.refractive(), 0.9);
    assert_eq!(glass.ior(), 1.33);
    assert_eq!(glass.absorbance(), 0.8);
}

#[test]
fn bounce_budget_only_for_reflective_or_refractive_surfaces() {
    assert_eq!(Material::default().max_ref(), 0);
    assert_eq!(Material::default().with_max_ref(9).max_ref(), 0);
    let mirror = Material::new(0.0, 0.0, 0.0).with_reflection(1.0);
    assert_eq!(mirror.max_ref(), Material::DEFAULT_MAX_REF);
    assert_eq!(mirror.clone().with_max_ref(2).max_ref(), 2);
    let clear = Material::new(0.0, 0.0, 0.0).with_refraction(1.0, 1.5);
    assert_eq!(clear.max_ref(), Material::DEFAULT_MAX_REF);
}

#[test]
#[should_panic]
fn negative_absorbance_is_rejected() {
    Material::default().with_absorbance(-0.1);
}

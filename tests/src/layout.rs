use geometry::dir::Dir;
use motu::plan::MacroPlan;
use motu::Error;
use sky130::Sky130Layer;

/// A two-row macro exercising every stream section: tap column,
/// reflected placement, power rail, and a branched net with a deferred
/// layer transition.
const CONTROL_PLAN: &str = r#"
    fill = false
    tap_columns = [0]

    [grid]
    columns = 6
    rows = 2

    [power]
    power = "VPWR"

    [[cells]]
    name = "sky130_fd_sc_hd__inv_2"
    width = 3

    [[placements]]
    name = "u_inv"
    cell = "sky130_fd_sc_hd__inv_2"
    col = 2
    row = 1
    reflect = true

    [[rails]]
    x = 2760
    width = 480
    polarity = "power"

    [[nets]]
    name = "out"
    route = [
        { op = "start", layer = "met1", at = [1, 0, 2] },
        { op = "move_rel", by = [2, 0, 0] },
        { op = "push" },
        { op = "via", layer = "met2" },
        { op = "move_rel", by = [0, 0, 2] },
        { op = "pop" },
        { op = "move_rel", by = [2, 0, 0] },
        { op = "end" },
        { op = "port", name = "out", index = 2, class = "output" },
    ]
"#;

fn execute(plan: &str) -> motu::plan::MacroOutput {
    let plan: MacroPlan<Sky130Layer> = toml::from_str(plan).unwrap();
    plan.execute(&sky130::tech()).unwrap()
}

#[test]
fn branch_routed_macro_matches_golden() {
    let output = execute(CONTROL_PLAN);
    let mut buf = Vec::new();
    output.write_geometry(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "box position 0.000u 0.000u\n\
         getcell sky130_fd_sc_hd__tapvpwrvgnd_1\n\
         box position 0.000u 2.720u\n\
         getcell sky130_fd_sc_hd__tapvpwrvgnd_1 v\n\
         box position 0.920u 2.720u\n\
         getcell sky130_fd_sc_hd__inv_2 180\n\
         box values 2.760u -0.240u 3.240u 5.680u\n\
         paint met4\n\
         box values 2.760u -0.240u 3.240u 5.680u\n\
         label {VPWR} FreeSans 0.100u 0 0 0 n met4\n\
         port make 1\n\
         port {VPWR} use power\n\
         port {VPWR} class input\n\
         box values 2.760u 2.480u 3.240u 2.960u\n\
         paint met2\n\
         box values 2.760u 2.480u 3.240u 2.960u\n\
         paint met3\n\
         box values 2.760u 2.510u 3.240u 2.930u\n\
         paint m2c\n\
         box values 2.785u 2.525u 3.215u 2.915u\n\
         paint m3c\n\
         box values 2.765u 2.510u 3.235u 2.930u\n\
         paint via3\n\
         box values 0.620u 1.120u 1.680u 1.260u\n\
         paint met1\n\
         box values 1.450u 1.060u 1.770u 1.320u\n\
         paint met1\n\
         box values 1.480u 1.060u 1.740u 1.320u\n\
         paint m2c\n\
         box values 1.480u 1.030u 1.740u 1.350u\n\
         paint met2\n\
         box values 1.540u 1.120u 1.680u 1.940u\n\
         paint met2\n\
         box values 1.540u 1.120u 2.600u 1.260u\n\
         paint met1\n\
         box values 2.460u 1.120u 2.600u 1.260u\n\
         label {out} FreeSans 0.025u 0 0 0 n met1\n\
         port make 2\n\
         port {out} use digital\n\
         port {out} class output\n"
    );

    // With fill disabled no decaps exist, so the instance stream is
    // empty rather than absent.
    let mut buf = Vec::new();
    output.write_instances(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "");
}

#[test]
fn regeneration_is_byte_identical() {
    let plan: MacroPlan<Sky130Layer> = toml::from_str(CONTROL_PLAN).unwrap();
    let tech = sky130::tech();
    let render = |output: &motu::plan::MacroOutput| {
        let mut buf = Vec::new();
        output.write_geometry(&mut buf).unwrap();
        buf
    };
    let first = render(&plan.execute(&tech).unwrap());
    let second = render(&plan.execute(&tech).unwrap());
    assert_eq!(first, second);
}

#[test]
fn unroutable_transition_aborts_the_run() {
    let plan: MacroPlan<Sky130Layer> = toml::from_str(
        r#"
        fill = false

        [grid]
        columns = 2
        rows = 1

        [[nets]]
        name = "bad"
        route = [
            { op = "start", layer = "li", at = [0, 0, 0] },
            { op = "via", layer = "met2" },
            { op = "end" },
        ]
        "#,
    )
    .unwrap();
    assert_eq!(
        plan.execute(&sky130::tech()).unwrap_err(),
        Error::NoViaRule {
            from: "li",
            from_dir: None,
            to: "met2",
            to_dir: Some(Dir::Vert),
        }
    );
}

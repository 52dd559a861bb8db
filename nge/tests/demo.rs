use {anyhow::Result, assert_cmd::Command, predicates::prelude::*};

#[test]
fn demo_prints_every_strategy() -> Result<()> {
    Command::cargo_bin("nge")
        .unwrap()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Daily temperatures:\n"))
        .stdout(predicate::str::contains(
            "  stack: [73, 74, 75, 71, 69, 72, 76, 73] -> [1, 1, 4, 2, 1, 1, 0, 0]\n",
        ))
        .stdout(predicate::str::contains(
            "  jump: [30, 40, 50, 60] -> [1, 1, 1, 0]\n",
        ))
        .stdout(predicate::str::contains(
            "  brute-force: [30, 60, 90] -> [1, 1, 0]\n",
        ))
        .stdout(predicate::str::contains(
            "\nCircular next greater element:\n",
        ))
        .stdout(predicate::str::contains("  stack: [1, 2, 1] -> [2, -1, 2]\n"))
        .stdout(predicate::str::contains(
            "  brute-force: [1, 2, 3, 4, 3] -> [2, 3, 4, -1, 4]\n",
        ))
        .stdout(predicate::str::contains("jump: [1, 2, 1]").not());
    Ok(())
}

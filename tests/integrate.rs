use std::{collections::BTreeMap, fs::File, io::Read};

use assert_cmd::Command;
use checking_ledger::{ledger::AccountSummary, AccountNumber};

fn executable() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

fn read_summary(reader: impl Read) -> anyhow::Result<BTreeMap<AccountNumber, AccountSummary>> {
    let mut b = csv::ReaderBuilder::new();
    b.trim(csv::Trim::All);
    let mut rdr = b.from_reader(reader);

    let mut map = BTreeMap::new();
    for acc_summ in rdr.deserialize() {
        let acc_summ: AccountSummary = acc_summ?;

        assert!(map.insert(acc_summ.account, acc_summ).is_none());
    }

    Ok(map)
}

#[test]
fn system_test() {
    let tests = vec![1, 2];

    for test_no in tests {
        let in_file = format!("./tests/csvs/in{test_no}.csv");
        let out_file = format!("./tests/csvs/out{test_no}.csv");

        let out = executable()
            .arg(in_file)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        //deserialize_output
        let out = read_summary(out.as_slice()).unwrap();
        let exp = read_summary(File::open(out_file).unwrap()).unwrap();
        assert_eq!(out, exp);
    }
}

#[test]
fn custom_terms_apply_to_replay() {
    let out = executable()
        .args(["./tests/csvs/in1.csv", "--max-withdrawals", "4"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let out = read_summary(out.as_slice()).unwrap();
    assert_eq!(out[&1].withdrawals, 4);
    assert_eq!(out[&1].balance, rust_decimal::Decimal::new(200, 0));
}

#[test]
fn missing_input_file_fails() {
    executable()
        .arg("./tests/csvs/does_not_exist.csv")
        .assert()
        .failure();
}

#[test]
fn interactive_session() {
    let input = "4\n111\nAna Lima\n01-02-1990\nMain St 1\n\
                 5\n111\n\
                 1\n111\n1000\n\
                 2\n111\n600\n\
                 3\n111\n\
                 q\n";

    let out = executable()
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Deposit of R$ 1000.00 completed successfully"));
    assert!(out.contains("limit exceeded"));
    assert!(out.contains("- Deposit: R$ 1000.00"));
    assert!(out.contains("\tR$ 1000.00"));
}

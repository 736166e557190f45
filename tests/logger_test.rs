use healthy_coder::utils::logger;
use healthy_coder::{get_bmi_scores, Coder};

#[test]
fn test_logger_installs_once() {
    assert!(logger::init_json_logger());
    // A global subscriber is already in place.
    assert!(!logger::init_logger(false));

    let scores = get_bmi_scores(&[Coder::new(1.80, 60.0)]).unwrap();
    assert_eq!(scores, vec![18.52]);
}

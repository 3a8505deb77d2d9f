use super::*;

#[test]
fn test_parse_not_a_url() {
    assert_eq!(parse_remote("not a url"), None);
}

#[test]
fn test_parse_empty_url() {
    assert_eq!(parse_remote(""), None);
}

#[test]
fn test_parse_url_missing_repo() {
    assert_eq!(parse_remote("https://github.com/hubot"), None);
    assert_eq!(parse_remote("git@github.com:hubot"), None);
}

#[test]
fn test_parse_rejects_nested_paths() {
    assert_eq!(parse_remote("https://gitlab.com/group/subgroup/repo.git"), None);
    assert_eq!(parse_remote("git@gitlab.com:group/subgroup/repo.git"), None);
}

#[test]
fn test_parse_rejects_bare_git_suffix_as_name() {
    assert_eq!(parse_remote("https://github.com/hubot/.git"), None);
}

#[test]
fn test_parse_rejects_local_paths() {
    assert_eq!(parse_remote("/home/hubot/repo"), None);
    assert_eq!(parse_remote("C:/Users/hubot/repo"), None);
    assert_eq!(parse_remote("./hubot/repo"), None);
}

#[test]
fn test_parse_scheme_is_case_sensitive() {
    assert_eq!(parse_remote("HTTPS://github.com/hubot/repo"), None);
}

#[test]
fn test_parse_preserves_hostname_case() {
    let parsed = parse_remote("https://GHE.Example.COM/hubot/repo").expect("should parse");
    assert_eq!(parsed.hostname(), "GHE.Example.COM");
}

#[test]
fn test_parse_keeps_port_in_hostname() {
    let parsed = parse_remote("ssh://git@git.company.com:2222/team/api.git").expect("should parse");
    assert_eq!(parsed.hostname(), "git.company.com:2222");
    assert_eq!(parsed.full_name(), "team/api");
}

#[test]
fn test_parse_is_idempotent_on_canonical_form() {
    let parsed = parse_remote("ssh://monalisa@github.com/hubot/repo.git/").expect("should parse");
    assert_eq!(parse_remote(&parsed.to_https_url()), Some(parsed.clone()));
    assert_eq!(parsed.to_string(), "github.com/hubot/repo");
}

#[test]
fn test_strip_remote_suffix() {
    assert_eq!(strip_remote_suffix("https://github.com/a/b.git"), "https://github.com/a/b");
    assert_eq!(strip_remote_suffix("https://github.com/a/b/"), "https://github.com/a/b");
    assert_eq!(strip_remote_suffix("https://github.com/a/b.git/"), "https://github.com/a/b");
    assert_eq!(strip_remote_suffix("https://github.com/a/b"), "https://github.com/a/b");
    assert_eq!(strip_remote_suffix("b.git.git"), "b.git");
}

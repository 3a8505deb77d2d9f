use super::*;

fn hubot_repo() -> Option<ParsedRemote> {
    Some(ParsedRemote::new("github.com", "hubot", "repo"))
}

#[test]
fn test_parse_git_protocol() {
    assert_eq!(parse_remote("git:github.com/hubot/repo.git"), hubot_repo());
}

#[test]
fn test_parse_git_protocol_without_git_suffix() {
    assert_eq!(parse_remote("git:github.com/hubot/repo"), hubot_repo());
}

#[test]
fn test_parse_git_protocol_with_trailing_slash() {
    assert_eq!(parse_remote("git:github.com/hubot/repo/"), hubot_repo());
}

#[test]
fn test_parse_git_protocol_double_slash() {
    assert_eq!(parse_remote("git://github.com/hubot/repo.git"), hubot_repo());
}

#[test]
fn test_parse_ssh_url() {
    assert_eq!(parse_remote("ssh://git@github.com/hubot/repo"), hubot_repo());
}

#[test]
fn test_parse_ssh_url_with_trailing_slash() {
    assert_eq!(parse_remote("ssh://git@github.com/hubot/repo/"), hubot_repo());
}

#[test]
fn test_parse_ssh_url_without_user() {
    assert_eq!(parse_remote("ssh://github.com/hubot/repo.git"), hubot_repo());
}

#[test]
fn test_parse_suffix_and_slash_together() {
    assert_eq!(parse_remote("https://github.com/hubot/repo.git/"), hubot_repo());
    assert_eq!(parse_remote("git@github.com:hubot/repo.git/"), hubot_repo());
}

#[test]
fn test_parse_strips_only_one_git_suffix() {
    let parsed = parse_remote("https://github.com/hubot/repo.git.git").expect("should parse");
    assert_eq!(parsed.name(), "repo.git");
}

#[test]
fn test_parse_url_with_whitespace() {
    assert_eq!(parse_remote("  git@github.com:hubot/repo.git\n"), hubot_repo());
}

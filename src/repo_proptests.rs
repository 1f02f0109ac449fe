use super::*;
use proptest::prelude::*;

/// owner/repo に使える文字列（英数字、ハイフン、アンダースコア）
fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,19}".prop_map(|s| s)
}

/// トークンに使える文字列（URLエンコードが不要な範囲）
fn valid_token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,20}".prop_map(|s| s)
}

proptest! {
    /// `.git` の有無・末尾スラッシュの有無で識別子は変わらない
    #[test]
    fn prop_suffix_forms_produce_same_name(
        owner in valid_name_strategy(),
        repo in valid_name_strategy()
    ) {
        let bare = format!("https://github.com/{}/{}", owner, repo);
        let with_git = format!("https://github.com/{}/{}.git", owner, repo);
        let with_slash = format!("https://github.com/{}/{}/", owner, repo);

        let result_bare = RepoReference::new(&bare, false, None, None).unwrap();
        let result_git = RepoReference::new(&with_git, false, None, None).unwrap();
        let result_slash = RepoReference::new(&with_slash, false, None, None).unwrap();

        prop_assert_eq!(result_bare.package_name(), result_git.package_name());
        prop_assert_eq!(result_bare.package_name(), result_slash.package_name());
    }

    /// 識別子は常に小文字
    #[test]
    fn prop_package_name_is_lowercase(
        owner in valid_name_strategy(),
        repo in valid_name_strategy()
    ) {
        let input = format!("https://github.com/{}/{}", owner, repo);
        let result = RepoReference::new(&input, false, None, None).unwrap();

        let name = result.package_name().as_str();
        prop_assert_eq!(name, name.to_lowercase());
    }

    /// basenameの大文字小文字違いは同じ識別子になる
    #[test]
    fn prop_case_variants_produce_same_name(
        owner in valid_name_strategy(),
        repo in valid_name_strategy()
    ) {
        let lower = format!("https://github.com/{}/{}", owner, repo.to_lowercase());
        let upper = format!("https://github.com/{}/{}", owner, repo.to_uppercase());

        let result_lower = RepoReference::new(&lower, false, None, None).unwrap();
        let result_upper = RepoReference::new(&upper, false, None, None).unwrap();

        prop_assert_eq!(result_lower.package_name(), result_upper.package_name());
    }

    /// privateかつトークンありのclone用URLはauthority直前に注入される
    #[test]
    fn prop_clone_url_injects_token(
        owner in valid_name_strategy(),
        repo in valid_name_strategy(),
        token in valid_token_strategy()
    ) {
        let input = format!("https://github.com/{}/{}.git", owner, repo);
        let reference =
            RepoReference::new(&input, true, Some(token.clone()), None).unwrap();

        let expected = format!("https://{}@github.com/{}/{}.git", token, owner, repo);
        prop_assert_eq!(reference.clone_url(), expected);
    }

    /// publicのclone用URLは入力と一致する
    #[test]
    fn prop_clone_url_public_is_unchanged(
        owner in valid_name_strategy(),
        repo in valid_name_strategy(),
        token in valid_token_strategy()
    ) {
        let input = format!("https://github.com/{}/{}.git", owner, repo);
        let reference = RepoReference::new(&input, false, Some(token), None).unwrap();

        prop_assert_eq!(reference.clone_url(), input);
    }
}

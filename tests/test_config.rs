use clap::Parser;
use raycast_arena::config::*;

#[test]
fn defaults_to_arena_at_960x540() {
    let cli = Cli::try_parse_from(["raycast_arena"]).unwrap();
    assert_eq!(cli.variant, Variant::Arena);
    assert_eq!((cli.width, cli.height), (DEFAULT_FB_WIDTH, DEFAULT_FB_HEIGHT));
}

#[test]
fn framebuffer_size_is_bounded() {
    assert!(Cli::try_parse_from(["raycast_arena", "--width", "100000"]).is_err());
    assert!(Cli::try_parse_from(["raycast_arena", "--height", "4000000000"]).is_err());
    assert!(Cli::try_parse_from(["raycast_arena", "--width", "10"]).is_err());

    let cli = Cli::try_parse_from(["raycast_arena", "--width", "7680", "--height", "4320"]).unwrap();
    assert_eq!((cli.width, cli.height), (MAX_FB_WIDTH, MAX_FB_HEIGHT));
}

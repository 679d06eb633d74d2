use cfgclean::cli::command;

fn main() {
    command::terminal_init();
    env_logger::init();
    command::root();
}

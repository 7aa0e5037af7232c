//! Canned full-moon backgrounds for the ASCII renderer, one per supported
//! height. Each row is exactly `2 * height + 1` columns wide.

const BACKGROUND_18: [&str; 18] = [
    "             .----------.            ",
    "         .--'   o    .   `--.        ",
    "       .'@  @@@@@@ O   .   . `.      ",
    "     .'@@  @@@@@@@@   @@@@   . `.    ",
    "   .'    . @@@@@@@@  @@@@@@    . `.  ",
    "  / @@ o    @@@@@@.   @@@@    O   @\\ ",
    "  |@@@@               @@@@@@     @@| ",
    " / @@@@@   `.-.    . @@@@@@@@  .  @@\\",
    " | @@@@   --`-'  .  o  @@@@@@@      |",
    " |@ @@                 @@@@@@ @@@   |",
    " \\      @@    @   . ()  @@   @@@@@  /",
    "  |   @      @@@         @@@  @@@  | ",
    "  \\  .   @@  @\\  .      .  @@    o / ",
    "   `.   @@@@  _\\ /     .      o  .'  ",
    "     `.  @@    ()---           .'    ",
    "       `.     / |  .    o    .'      ",
    "         `--./   .       .--'        ",
    "             `----------'            ",
];

const BACKGROUND_19: [&str; 19] = [
    "              .----------.             ",
    "          .--'   o    .   `--.         ",
    "       .-'@  @@@@@@ O   .   . `-.      ",
    "     .' @@  @@@@@@@@   @@@@   .  `.    ",
    "    /     . @@@@@@@@  @@@@@@     . \\   ",
    "   /@@  o    @@@@@@.   @@@@    O   @\\  ",
    "  /@@@@                @@@@@@     @@@\\ ",
    " . @@@@@   `.-./    . @@@@@@@@  .  @@ .",
    " | @@@@   --`-'  .      @@@@@@@       |",
    " |@ @@        `      o  @@@@@@ @@@@   |",
    " |      @@        o      @@   @@@@@@  |",
    " ` .  @       @@     ()   @@@  @@@@   '",
    "  \\     @@   @@@@        . @@   .  o / ",
    "   \\   @@@@  @@\\  .           o     /  ",
    "    \\ . @@     _\\ /    .      .-.  /   ",
    "     `.    .    ()---        `-' .'    ",
    "       `-.    ./ |  .   o     .-'      ",
    "          `--./   .       .--'         ",
    "              `----------'             ",
];

const BACKGROUND_21: [&str; 21] = [
    "                .----------.               ",
    "           .---'   O   . .  `---.          ",
    "        .-'@ @@@@@@  .  @@@@@    `-.       ",
    "      .'@@  @@@@@@@@@  @@@@@@@   .  `.     ",
    "     /   o  @@@@@@@@@  @@@@@@@      . \\    ",
    "    /@  o   @@@@@@@@@.  @@@@@@@   O    \\   ",
    "   /@@@  .   @@@@@@o   @@@@@@@@@@     @@\\  ",
    "  /@@@@@            . @@@@@@@@@@@@@ o @@@\\ ",
    " .@@@@@ O  `.-./ .     @@@@@@@@@@@@    @@ .",
    " | @@@@   --`-'      o    @@@@@@@@ @@@@   |",
    " |@ @@@       `   o     .  @@  . @@@@@@@  |",
    " |      @@  @        .-.    @@@  @@@@@@@  |",
    " `  . @       @@@    `-'  . @@@@  @@@@  o '",
    "  \\     @@   @@@@@ .         @@  .       / ",
    "   \\   @@@@  @\\@@    /  . O   .    o  . /  ",
    "    \\o  @@     \\ \\  /       .   .      /   ",
    "     \\    .    .\\.-.___  .     .  .-. /    ",
    "      `.         `-'             `-'.'     ",
    "        `-.  o  / |    o   O  .  .-'       ",
    "           `---.    .    .  .---'          ",
    "                `----------'               ",
];

const BACKGROUND_22: [&str; 22] = [
    "                .------------.               ",
    "            .--'   o     . .  `--.           ",
    "         .-'    .    O   .      . `-.        ",
    "       .'@    @@@@@@@   .  @@@@@     `.      ",
    "     .'@@@  @@@@@@@@@@@   @@@@@@@  .   `.    ",
    "    /     o @@@@@@@@@@@   @@@@@@@      . \\   ",
    "   /@@  o   @@@@@@@@@@@.   @@@@@@@   O    \\  ",
    "  /@@@@   .   @@@@@@@o    @@@@@@@@@@    @@@\\ ",
    "  |@@@@@               . @@@@@@@@@@@@  @@@@| ",
    " /@@@@@  O  `.-./  .      @@@@@@@@@@@   @@  \\",
    " | @@@@    --`-'      o    . @@@@@@@ @@@@   |",
    " |@ @@@  @@  @ `   o  .-.     @@  . @@@@@@  |",
    " \\             @@@    `-'  .   @@@  @@@@@@  /",
    "  | . @  @@   @@@@@ .          @@@@  @@@ o | ",
    "  \\     @@@@  @\\@@    /  .  O   @@ .     . / ",
    "   \\  o  @@     \\ \\  /          . . o     /  ",
    "    \\      .    .\\.-.___   .  .  .  .-.  /   ",
    "     `.           `-'              `-' .'    ",
    "       `.    o   / |     o   O   .   .'      ",
    "         `-.    /     .      .    .-'        ",
    "            `--.        .     .--'           ",
    "                `------------'               ",
];

const BACKGROUND_23: [&str; 23] = [
    "                 .------------.                ",
    "             .--'  o     . .   `--.            ",
    "          .-'   .    O   .       . `-.         ",
    "       .-'@   @@@@@@@   .  @@@@@      `-.      ",
    "      /@@@  @@@@@@@@@@@   @@@@@@@   .    \\     ",
    "    ./    o @@@@@@@@@@@   @@@@@@@       . \\.   ",
    "   /@@  o   @@@@@@@@@@@.   @@@@@@@   O      \\  ",
    "  /@@@@   .   @@@@@@@o    @@@@@@@@@@     @@@ \\ ",
    "  |@@@@@               . @@@@@@@@@@@@@ o @@@@| ",
    " /@@@@@  O  `.-./  .      @@@@@@@@@@@@    @@  \\",
    " | @@@@    --`-'       o     @@@@@@@@ @@@@    |",
    " |@ @@@        `    o      .  @@   . @@@@@@@  |",
    " |       @@  @         .-.     @@@   @@@@@@@  |",
    " \\  . @        @@@     `-'   . @@@@   @@@@  o /",
    "  |      @@   @@@@@ .           @@   .       | ",
    "  \\     @@@@  @\\@@    /  .  O    .     o   . / ",
    "   \\  o  @@     \\ \\  /         .    .       /  ",
    "    `\\     .    .\\.-.___   .      .   .-. /'   ",
    "      \\           `-'                `-' /     ",
    "       `-.   o   / |     o    O   .   .-'      ",
    "          `-.   /     .       .    .-'         ",
    "             `--.       .      .--'            ",
    "                 `------------'                ",
];

const BACKGROUND_24: [&str; 24] = [
    "                  .------------.                 ",
    "             .---' o     .  .   `---.            ",
    "          .-'   .    O    .       .  `-.         ",
    "        .'@   @@@@@@@   .   @@@@@       `.       ",
    "      .'@@  @@@@@@@@@@@    @@@@@@@   .    `.     ",
    "     /    o @@@@@@@@@@@    @@@@@@@       .  \\    ",
    "    /@  o   @@@@@@@@@@@.    @@@@@@@   O      \\   ",
    "   /@@@   .   @@@@@@@o     @@@@@@@@@@     @@@ \\  ",
    "  /@@@@@               .  @@@@@@@@@@@@@ o @@@@ \\ ",
    "  |@@@@  O  `.-./  .       @@@@@@@@@@@@    @@  | ",
    " / @@@@    --`-'       o      @@@@@@@@ @@@@     \\",
    " |@ @@@     @  `           .   @@     @@@@@@@   |",
    " |      @           o          @      @@@@@@@   |",
    " \\       @@            .-.      @@@    @@@@  o  /",
    "  | . @        @@@     `-'    . @@@@           | ",
    "  \\      @@   @@@@@ .            @@   .        / ",
    "   \\    @@@@  @\\@@    /  .   O    .     o   . /  ",
    "    \\ o  @@     \\ \\  /          .    .       /   ",
    "     \\     .    .\\.-.___    .      .   .-.  /    ",
    "      `.          `-'                 `-' .'     ",
    "        `.   o   / |      o    O   .    .'       ",
    "          `-.   /      .       .     .-'         ",
    "             `---.       .      .---'            ",
    "                  `------------'                 ",
];

const BACKGROUND_29: [&str; 29] = [
    "                      .--------------.                     ",
    "                 .---'  o        .    `---.                ",
    "              .-'    .    O  .         .   `-.             ",
    "           .-'     @@@@@@       .             `-.          ",
    "         .'@@   @@@@@@@@@@@       @@@@@@@   .    `.        ",
    "       .'@@@  @@@@@@@@@@@@@@     @@@@@@@@@         `.      ",
    "      /@@@  o @@@@@@@@@@@@@@     @@@@@@@@@     O     \\     ",
    "     /        @@@@@@@@@@@@@@  @   @@@@@@@@@ @@     .  \\    ",
    "    /@  o      @@@@@@@@@@@   .  @@  @@@@@@@@@@@     @@ \\   ",
    "   /@@@      .   @@@@@@ o       @  @@@@@@@@@@@@@ o @@@@ \\  ",
    "  /@@@@@                  @ .      @@@@@@@@@@@@@@  @@@@@ \\ ",
    "  |@@@@@    O    `.-./  .        .  @@@@@@@@@@@@@   @@@  | ",
    " / @@@@@        --`-'       o        @@@@@@@@@@@ @@@    . \\",
    " |@ @@@@ .  @  @    `    @            @@      . @@@@@@    |",
    " |   @@                         o    @@   .     @@@@@@    |",
    " |  .     @   @ @       o              @@   o   @@@@@@.   |",
    " \\     @    @       @       .-.       @@@@       @@@      /",
    "  |  @    @  @              `-'     . @@@@     .    .    | ",
    "  \\ .  o       @  @@@@  .              @@  .           . / ",
    "   \\      @@@    @@@@@@       .                   o     /  ",
    "    \\    @@@@@   @@\\@@    /        O          .        /   ",
    "     \\ o  @@@       \\ \\  /  __        .   .     .--.  /    ",
    "      \\      .     . \\.-.---                   `--'  /     ",
    "       `.             `-'      .                   .'      ",
    "         `.    o     / | `           O     .     .'        ",
    "           `-.      /  |        o             .-'          ",
    "              `-.          .         .     .-'             ",
    "                 `---.        .       .---'                ",
    "                      `--------------'                     ",
];

const BACKGROUND_32: [&str; 32] = [
    "                         .--------------.                        ",
    "                   .----'  o        .    `----.                  ",
    "                .-'     .    O  .          .   `-.               ",
    "             .-'      @@@@@@       .              `-.            ",
    "           .'@     @@@@@@@@@@@       @@@@@@@@    .   `.          ",
    "         .'@@    @@@@@@@@@@@@@@     @@@@@@@@@@         `.        ",
    "       .'@@@ o   @@@@@@@@@@@@@@     @@@@@@@@@@      o    `.      ",
    "      /@@@       @@@@@@@@@@@@@@  @   @@@@@@@@@@  @@     .  \\     ",
    "     /            @@@@@@@@@@@   .  @@   @@@@@@@@@@@@     @@ \\    ",
    "    /@  o     .     @@@@@@ o       @   @@@@@@@@@@@@@@ o @@@@ \\   ",
    "   /@@@                        .       @@@@@@@@@@@@@@@  @@@@@ \\  ",
    "  /@@@@@                     @      .   @@@@@@@@@@@@@@   @@@   \\ ",
    "  |@@@@@     o      `.-./  .             @@@@@@@@@@@@ @@@    . | ",
    " / @@@@@           __`-'       o          @@       . @@@@@@     \\",
    " |@ @@@@ .        @    `    @            @@    .     @@@@@@     |",
    " |   @@       @                    o       @@@   o   @@@@@@.    |",
    " |          @                             @@@@@       @@@       |",
    " |  . .  @      @  @       o              @@@@@     .    .      |",
    " \\            @                .-.      .  @@@  .           .   /",
    "  |    @   @   @      @        `-'                     .       / ",
    "  \\   .      @   @                   .            o            / ",
    "   \\     o          @@@@   .                .                 /  ",
    "    \\       @@@    @@@@@@        .                    o      /   ",
    "     \\     @@@@@   @@\\@@    /         o           .         /    ",
    "      \\  o  @@@       \\ \\  /  ___         .   .     .--.   /     ",
    "       `.      .       \\.-.---                     `--'  .'      ",
    "         `.             `-'       .                    .'        ",
    "           `.    o     / |              O      .     .'          ",
    "             `-.      /  |         o              .-'            ",
    "                `-.           .         .      .-'               ",
    "                   `----.        .       .----'                  ",
    "                         `--------------'                        ",
];

/// Background rows for a given height, if one exists.
pub(crate) fn background(lines: usize) -> Option<&'static [&'static str]> {
    match lines {
        18 => Some(&BACKGROUND_18),
        19 => Some(&BACKGROUND_19),
        21 => Some(&BACKGROUND_21),
        22 => Some(&BACKGROUND_22),
        23 => Some(&BACKGROUND_23),
        24 => Some(&BACKGROUND_24),
        29 => Some(&BACKGROUND_29),
        32 => Some(&BACKGROUND_32),
        _ => None,
    }
}

//! Title screen art and welcome message.

pub const TITLE: &str = r"
*  .    O  @    ~~~   o    *  .    O  @    ~~~   o    *  .    O
                    ___
 || ||\ || ||\ || ||    || \\    ||    || || ||    || \\  (( \
 || ||\\|| ||\\|| ||==  ||_//    \\ /\ // || ||    ||  ))  \\
 || || \|| || \|| ||___ || \\     \V/\V/  || ||__| ||_//  \_))

*  .    O  @    ~~~   o    *  .    O  @    ~~~   o    *  .    O
";

pub const WELCOME: &str =
    "Welcome aboard, captain!  Please check the readme for instructions on how to play.";

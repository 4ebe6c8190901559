//! Clause layout of real verses, one clause per line.

use pretty_assertions::assert_eq;
use rstest::rstest;
use versemark_engine::{BreakStyle, reflow};

#[rstest]
#[case(1, "After this there was a feast of the Jews, and Jesus went up to Jerusalem.", "1. After this there was a feast of the Jews,\n    and Jesus went up to Jerusalem.")]
#[case(6, "When Jesus saw him lying there and knew that he had already been there a long time, he said to him, \"Do you want to be healed?\"", "6. When Jesus saw him lying there and knew that he had already been there a long time,\n    he said to him,\n    \"Do you want to be healed?\"")]
#[case(9, "And at once the man was healed, and he took up his bed and walked. Now that day was the Sabbath.", "9. And at once the man was healed,\n    and he took up his bed and walked.\n    Now that day was the Sabbath.")]
#[case(21, "And they asked him, \"What then? Are you Elijah?\" He said, \"I am not.\" \"Are you the Prophet?\" And he answered, \"No.\"", "21. And they asked him,\n    \"What then?\n    Are you Elijah?\"\n    He said,\n    \"I am not.\"\n    \"Are you the Prophet?\"\n    And he answered,\n    \"No.\"")]
#[case(42, "He brought him to Jesus. Jesus looked at him and said, \"You are Simon the son of John. You shall be called Cephas\" (which means Peter(12)).", "42. He brought him to Jesus.\n    Jesus looked at him and said,\n    \"You are Simon the son of John.\n    You shall be called Cephas\"\n    (which means Peter(12)).")]
#[case(4, "Nicodemus said to him, \"How can a man be born when he is old? Can he enter a second time into his mother's womb and be born?\"", "4. Nicodemus said to him,\n    \"How can a man be born when he is old?\n    Can he enter a second time into his mother's womb and be born?\"")]
#[case(25, "Jesus said to her, \"I am the resurrection and the life.(4) Whoever believes in me, though he die, yet shall he live,", "25. Jesus said to her,\n    \"I am the resurrection and the life.(4)\n    Whoever believes in me, though he die, yet shall he live,")]
#[case(14, "so that in Christ Jesus the blessing of Abraham might come to the Gentiles, so that we might receive the promised Spirit(5) through faith.", "14. so that in Christ Jesus the blessing of Abraham might come to the Gentiles,\n    so that we might receive the promised Spirit(5) through faith.")]
#[case(8, "The wind(5) blows where it wishes, and you hear its sound, but you do not know where it comes from or where it goes. So it is with everyone who is born of the Spirit.\"", "8. The wind(5) blows where it wishes,\n    and you hear its sound,\n    but you do not know where it comes from or where it goes.\n    So it is with everyone who is born of the Spirit.\"")]
#[case(27, "And he has given him authority to execute judgment, because he is the Son of Man.", "27. And he has given him authority to execute judgment,\n    because he is the Son of Man.")]
#[case(15, "If you were of the world, the world would love you as its own; but because you are not of the world, but I chose you out of the world, therefore the world hates you.", "15. If you were of the world, the world would love you as its own;\n    but because you are not of the world,\n    but I chose you out of the world,\n    therefore the world hates you.")]
#[case(25, "and needed no one to bear witness about man, for he himself knew what was in man.", "25. and needed no one to bear witness about man,\n    for he himself knew what was in man.")]
#[case(5, "I have oxen, donkeys, flocks, male servants, and female servants. I have sent to tell my lord, in order that I may find favor in your sight.'\"", "5. I have oxen, donkeys, flocks, male servants, and female servants.\n    I have sent to tell my lord,\n    in order that I may find favor in your sight.'\"")]
#[case(22, "If I had not come and spoken to them, they would not have been guilty of sin,(2) but now they have no excuse for their sin.", "22. If I had not come and spoken to them, they would not have been guilty of sin,(2)\n    but now they have no excuse for their sin.")]
#[case(20, "Remember the word that I said to you: 'A servant is not greater than his master.' If they persecuted me, they will also persecute you. If they kept my word, they will also keep yours.", "20. Remember the word that I said to you:\n    'A servant is not greater than his master.'\n    If they persecuted me, they will also persecute you.\n    If they kept my word, they will also keep yours.")]
#[case(30, "How could one have chased a thousand, and two have put ten thousand to flight, unless their Rock had sold them, and the LORD had given them up?", "30. How could one have chased a thousand,\n    and two have put ten thousand to flight,\n    unless their Rock had sold them,\n    and the LORD had given them up?")]
#[case(4, "So Abram went, as the LORD had told him, and Lot went with him. Abram was seventy-five years old when he departed from Haran.", "4. So Abram went,\n    as the LORD had told him,\n    and Lot went with him.\n    Abram was seventy-five years old when he departed from Haran.")]
#[case(10, "and with every living creature that is with you, the birds, the livestock, and every beast of the earth with you, as many as came out of the ark; it is for every beast of the earth.", "10. and with every living creature that is with you, the birds, the livestock,\n    and every beast of the earth with you, as many as came out of the ark;\n    it is for every beast of the earth.")]
#[case(22, "The sons of Shem: Elam, Asshur, Arpachshad, Lud, and Aram.", "22. The sons of Shem:\n    Elam, Asshur, Arpachshad, Lud, and Aram.")]
#[case(29, "Ophir, Havilah, and Jobab; all these were the sons of Joktan.", "29. Ophir, Havilah, and Jobab;\n    all these were the sons of Joktan.")]
#[case(6, "He said this, not because he cared about the poor, but because he was a thief, and having charge of the moneybag he used to help himself to what was put into it.", "6. He said this,\n    not because he cared about the poor,\n    but because he was a thief,\n    and having charge of the moneybag he used to help himself to what was put into it.")]
#[case(9, "When the large crowd of the Jews learned that Jesus(4) was there, they came, not only on account of him but also to see Lazarus, whom he had raised from the dead.", "9. When the large crowd of the Jews learned that Jesus(4) was there, they came,\n    not only on account of him but also to see Lazarus,\n    whom he had raised from the dead.")]
#[case(31, "Now is the judgment of this world; now will the ruler of this world be cast out.", "31. Now is the judgment of this world;\n    now will the ruler of this world be cast out.")]
#[case(7, "Nevertheless, I tell you the truth: it is to your advantage that I go away, for if I do not go away, the Helper will not come to you. But if I go, I will send him to you.", "7. Nevertheless, I tell you the truth:\n    it is to your advantage that I go away,\n    for if I do not go away, the Helper will not come to you.\n    But if I go, I will send him to you.")]
#[case(9, "The true light, which gives light to everyone, was coming into the world.", "9. The true light,\n    which gives light to everyone, was coming into the world.")]
#[case(38, "He set the sticks that he had peeled in front of the flocks in the troughs, that is, the watering places, where the flocks came to drink. And since they bred when they came to drink,", "38. He set the sticks that he had peeled in front of the flocks in the troughs, that is, the watering places,\n    where the flocks came to drink.\n    And since they bred when they came to drink,")]
#[case(19, "And this is the testimony of John, when the Jews sent priests and Levites from Jerusalem to ask him, \"Who are you?\"", "19. And this is the testimony of John,\n    when the Jews sent priests and Levites from Jerusalem to ask him,\n    \"Who are you?\"")]
#[case(12, "But to all who did receive him, who believed in his name, he gave the right to become children of God,", "12. But to all who did receive him,\n    who believed in his name, he gave the right to become children of God,")]
#[case(24, "Moreover, his concubine, whose name was Reumah, bore Tebah, Gaham, Tahash, and Maacah.", "24. Moreover, his concubine,\n    whose name was Reumah, bore Tebah, Gaham, Tahash, and Maacah.")]
#[case(15, "And Hagar bore Abram a son, and Abram called the name of his son, whom Hagar bore, Ishmael.", "15. And Hagar bore Abram a son,\n    and Abram called the name of his son,\n    whom Hagar bore, Ishmael.")]
#[case(1, "Now Boaz had gone up to the gate and sat down there. And behold, the redeemer, of whom Boaz had spoken, came by. So Boaz said, \"Turn aside, friend; sit down here.\" And he turned aside and sat down.", "1. Now Boaz had gone up to the gate and sat down there.\n    And behold, the redeemer,\n    of whom Boaz had spoken, came by.\n    So Boaz said,\n    \"Turn aside, friend;\n    sit down here.\"\n    And he turned aside and sat down.")]
#[case(38, "The cattle were 36,000, of which the LORD’s tribute was 72.", "38. The cattle were 36,000,\n    of which the LORD’s tribute was 72.")]
#[case(24, "(Now they had been sent from the Pharisees.)", "24. (Now they had been sent from the Pharisees.)")]
#[case(19, "who sets his heart to seek God, the LORD, the God of his fathers, even though not according to the sanctuary's rules of cleanness.\"", "19. who sets his heart to seek God, the LORD, the God of his fathers,\n    even though not according to the sanctuary's rules of cleanness.\"")]
#[case(5, "They answered him, \"Jesus of Nazareth.\" Jesus said to them, \"I am he.\"(1) Judas, who betrayed him, was standing with them.", "5. They answered him,\n    \"Jesus of Nazareth.\"\n    Jesus said to them,\n    \"I am he.\"(1)\n    Judas,\n    who betrayed him, was standing with them.")]
#[case(29, "A jar full of sour wine stood there, so they put a sponge full of the sour wine on a hyssop branch and held it to his mouth.", "29. A jar full of sour wine stood there,\n    so they put a sponge full of the sour wine on a hyssop branch and held it to his mouth.")]
#[case(26, "When Jesus saw his mother and the disciple whom he loved standing nearby, he said to his mother, \"Woman, behold, your son!\"", "26. When Jesus saw his mother and the disciple whom he loved standing nearby,\n    he said to his mother,\n    \"Woman, behold, your son!\"")]
#[case(33, "But when they came to Jesus and saw that he was already dead, they did not break his legs.", "33. But when they came to Jesus and saw that he was already dead,\n    they did not break his legs.")]
#[case(13, "So when Pilate heard these words, he brought Jesus out and sat down on the judgment seat at a place called The Stone Pavement, and in Aramaic(2) Gabbatha.", "13. So when Pilate heard these words,\n    he brought Jesus out and sat down on the judgment seat at a place called The Stone Pavement,\n    and in Aramaic(2) Gabbatha.")]
#[case(8, "If she does not please her master, who has designated her for himself, then he shall let her be redeemed. He shall have no right to sell her to a foreign people, since he has broken faith with her.", "8. If she does not please her master,\n    who has designated her for himself, then he shall let her be redeemed.\n    He shall have no right to sell her to a foreign people,\n    since he has broken faith with her.")]
#[case(37, "sold a field that belonged to him and brought the money and laid it at the apostles' feet.", "37. sold a field that belonged to him and brought the money and laid it at the apostles' feet.")]
fn lays_out_verse(#[case] verse: u32, #[case] text: &str, #[case] expected: &str) {
    assert_eq!(reflow(text, Some(verse), BreakStyle::Plain), expected);
}

#[rstest]
#[case("After this there was a feast of the Jews, and Jesus went up to Jerusalem.")]
#[case("And they asked him, \"What then? Are you Elijah?\" He said, \"I am not.\" \"Are you the Prophet?\" And he answered, \"No.\"")]
#[case("Jesus said to her, \"I am the resurrection and the life.(4) Whoever believes in me, though he die, yet shall he live,")]
#[case("And he has given him authority to execute judgment, because he is the Son of Man.")]
#[case("I have oxen, donkeys, flocks, male servants, and female servants. I have sent to tell my lord, in order that I may find favor in your sight.'\"")]
#[case("How could one have chased a thousand, and two have put ten thousand to flight, unless their Rock had sold them, and the LORD had given them up?")]
#[case("The sons of Shem: Elam, Asshur, Arpachshad, Lud, and Aram.")]
#[case("When the large crowd of the Jews learned that Jesus(4) was there, they came, not only on account of him but also to see Lazarus, whom he had raised from the dead.")]
#[case("The true light, which gives light to everyone, was coming into the world.")]
#[case("But to all who did receive him, who believed in his name, he gave the right to become children of God,")]
#[case("Now Boaz had gone up to the gate and sat down there. And behold, the redeemer, of whom Boaz had spoken, came by. So Boaz said, \"Turn aside, friend; sit down here.\" And he turned aside and sat down.")]
#[case("who sets his heart to seek God, the LORD, the God of his fathers, even though not according to the sanctuary's rules of cleanness.\"")]
#[case("When Jesus saw his mother and the disciple whom he loved standing nearby, he said to his mother, \"Woman, behold, your son!\"")]
#[case("If she does not please her master, who has designated her for himself, then he shall let her be redeemed. He shall have no right to sell her to a foreign people, since he has broken faith with her.")]
fn reflow_is_idempotent(
    #[case] text: &str,
    #[values(BreakStyle::Plain, BreakStyle::Strict)] style: BreakStyle,
) {
    let once = reflow(text, None, style);
    assert_eq!(reflow(&once, None, style), once);
}

#[test]
fn strict_layout_matches_plain_layout_line_for_line() {
    let text = "And they asked him, \"What then? Are you Elijah?\" He said, \"I am not.\"";
    let plain = reflow(text, Some(21), BreakStyle::Plain);
    let strict = reflow(text, Some(21), BreakStyle::Strict);
    assert_eq!(strict.replace("<br>\u{2003}", "\n    "), plain);
}

//! Initialization values `(m, n)` for every context variable (Tables 9-12 to 9-33).
//!
//! Index 276 belongs to `end_of_slice_flag` and the terminating bin of `mb_type`. It is
//! never initialized from these tables. Entries marked `NA` have no value for the slice
//! kind in question.

/// Marker for an entry that is not applicable to the slice kind.
pub(crate) const NA: (i8, i8) = (i8::MIN, i8::MIN);

/// Values used for I and SI slices.
#[rustfmt::skip]
pub(crate) static INIT_I: [(i8, i8); 1024] = [
    /*    0 */ (20, -15), (2, 54), (3, 74), (20, -15),
    /*    4 */ (2, 54), (3, 74), (-28, 127), (-23, 104),
    /*    8 */ (-6, 53), (-1, 54), (7, 51), NA,
    /*   12 */ NA, NA, NA, NA,
    /*   16 */ NA, NA, NA, NA,
    /*   20 */ NA, NA, NA, NA,
    /*   24 */ NA, NA, NA, NA,
    /*   28 */ NA, NA, NA, NA,
    /*   32 */ NA, NA, NA, NA,
    /*   36 */ NA, NA, NA, NA,
    /*   40 */ NA, NA, NA, NA,
    /*   44 */ NA, NA, NA, NA,
    /*   48 */ NA, NA, NA, NA,
    /*   52 */ NA, NA, NA, NA,
    /*   56 */ NA, NA, NA, NA,
    /*   60 */ (0, 41), (0, 63), (0, 63), (0, 63),
    /*   64 */ (-9, 83), (4, 86), (0, 97), (-7, 72),
    /*   68 */ (13, 41), (3, 62), (0, 11), (1, 55),
    /*   72 */ (0, 69), (-17, 127), (-13, 102), (0, 82),
    /*   76 */ (-7, 74), (-21, 107), (-27, 127), (-31, 127),
    /*   80 */ (-24, 127), (-18, 95), (-27, 127), (-21, 114),
    /*   84 */ (-30, 127), (-17, 123), (-12, 115), (-16, 122),
    /*   88 */ (-11, 115), (-12, 63), (-2, 68), (-15, 84),
    /*   92 */ (-13, 104), (-3, 70), (-8, 93), (-10, 90),
    /*   96 */ (-30, 127), (-1, 74), (-6, 97), (-7, 91),
    /*  100 */ (-20, 127), (-4, 56), (-5, 82), (-7, 76),
    /*  104 */ (-22, 125), (-7, 93), (-11, 87), (-3, 77),
    /*  108 */ (-5, 71), (-4, 63), (-4, 68), (-12, 84),
    /*  112 */ (-7, 62), (-7, 65), (8, 61), (5, 56),
    /*  116 */ (-2, 66), (1, 64), (0, 61), (-2, 78),
    /*  120 */ (1, 50), (7, 52), (10, 35), (0, 44),
    /*  124 */ (11, 38), (1, 45), (0, 46), (5, 44),
    /*  128 */ (31, 17), (1, 51), (7, 50), (28, 19),
    /*  132 */ (16, 33), (14, 62), (-13, 108), (-15, 100),
    /*  136 */ (-13, 101), (-13, 91), (-12, 94), (-10, 88),
    /*  140 */ (-16, 84), (-10, 86), (-7, 83), (-13, 87),
    /*  144 */ (-19, 94), (1, 70), (0, 72), (-5, 74),
    /*  148 */ (18, 59), (-8, 102), (-15, 100), (0, 95),
    /*  152 */ (-4, 75), (2, 72), (-11, 75), (-3, 71),
    /*  156 */ (15, 46), (-13, 69), (0, 62), (0, 65),
    /*  160 */ (21, 37), (-15, 72), (9, 57), (16, 54),
    /*  164 */ (0, 62), (12, 72), (24, 0), (15, 9),
    /*  168 */ (8, 25), (13, 18), (15, 9), (13, 19),
    /*  172 */ (10, 37), (12, 18), (6, 29), (20, 33),
    /*  176 */ (15, 30), (4, 45), (1, 58), (0, 62),
    /*  180 */ (7, 61), (12, 38), (11, 45), (15, 39),
    /*  184 */ (11, 42), (13, 44), (16, 45), (12, 41),
    /*  188 */ (10, 49), (30, 34), (18, 42), (10, 55),
    /*  192 */ (17, 51), (17, 46), (0, 89), (26, -19),
    /*  196 */ (22, -17), (26, -17), (30, -25), (28, -20),
    /*  200 */ (33, -23), (37, -27), (33, -23), (40, -28),
    /*  204 */ (38, -17), (33, -11), (40, -15), (41, -6),
    /*  208 */ (38, 1), (41, 17), (30, -6), (27, 3),
    /*  212 */ (26, 22), (37, -16), (35, -4), (38, -8),
    /*  216 */ (38, -3), (37, 3), (38, 5), (42, 0),
    /*  220 */ (35, 16), (39, 22), (14, 48), (27, 37),
    /*  224 */ (21, 60), (12, 68), (2, 97), (-3, 71),
    /*  228 */ (-6, 42), (-5, 50), (-3, 54), (-2, 62),
    /*  232 */ (0, 58), (1, 63), (-2, 72), (-1, 74),
    /*  236 */ (-9, 91), (-5, 67), (-5, 27), (-3, 39),
    /*  240 */ (-2, 44), (0, 46), (-16, 64), (-8, 68),
    /*  244 */ (-10, 78), (-6, 77), (-10, 86), (-12, 92),
    /*  248 */ (-15, 55), (-10, 60), (-6, 62), (-4, 65),
    /*  252 */ (-12, 73), (-8, 76), (-7, 80), (-9, 88),
    /*  256 */ (-17, 110), (-11, 97), (-20, 84), (-11, 79),
    /*  260 */ (-6, 73), (-4, 74), (-13, 86), (-13, 96),
    /*  264 */ (-11, 97), (-19, 117), (-8, 78), (-5, 33),
    /*  268 */ (-4, 48), (-2, 53), (-3, 62), (-13, 71),
    /*  272 */ (-10, 79), (-12, 86), (-13, 90), (-14, 97),
    /*  276 */ NA, (-6, 93), (-6, 84), (-8, 79),
    /*  280 */ (0, 66), (-1, 71), (0, 62), (-2, 60),
    /*  284 */ (-2, 59), (-5, 75), (-3, 62), (-4, 58),
    /*  288 */ (-9, 66), (-1, 79), (0, 71), (3, 68),
    /*  292 */ (10, 44), (-7, 62), (15, 36), (14, 40),
    /*  296 */ (16, 27), (12, 29), (1, 44), (20, 36),
    /*  300 */ (18, 32), (5, 42), (1, 48), (10, 62),
    /*  304 */ (17, 46), (9, 64), (-12, 104), (-11, 97),
    /*  308 */ (-16, 96), (-7, 88), (-8, 85), (-7, 85),
    /*  312 */ (-9, 85), (-13, 88), (4, 66), (-3, 77),
    /*  316 */ (-3, 76), (-6, 76), (10, 58), (-1, 76),
    /*  320 */ (-1, 83), (-7, 99), (-14, 95), (2, 95),
    /*  324 */ (0, 76), (-5, 74), (0, 70), (-11, 75),
    /*  328 */ (1, 68), (0, 65), (-14, 73), (3, 62),
    /*  332 */ (4, 62), (-1, 68), (-13, 75), (11, 55),
    /*  336 */ (5, 64), (12, 70), (15, 6), (6, 19),
    /*  340 */ (7, 16), (12, 14), (18, 13), (13, 11),
    /*  344 */ (13, 15), (15, 16), (12, 23), (13, 23),
    /*  348 */ (15, 20), (14, 26), (14, 44), (17, 40),
    /*  352 */ (17, 47), (24, 17), (21, 21), (25, 22),
    /*  356 */ (31, 27), (22, 29), (19, 35), (14, 50),
    /*  360 */ (10, 57), (7, 63), (-2, 77), (-4, 82),
    /*  364 */ (-3, 94), (9, 69), (-12, 109), (36, -35),
    /*  368 */ (36, -34), (32, -26), (37, -30), (44, -32),
    /*  372 */ (34, -18), (34, -15), (40, -15), (33, -7),
    /*  376 */ (35, -5), (33, 0), (38, 2), (33, 13),
    /*  380 */ (23, 35), (13, 58), (29, -3), (26, 0),
    /*  384 */ (22, 30), (31, -7), (35, -15), (34, -3),
    /*  388 */ (34, 3), (36, -1), (34, 5), (32, 11),
    /*  392 */ (35, 5), (34, 12), (39, 11), (30, 29),
    /*  396 */ (34, 26), (29, 39), (19, 66), (31, 21),
    /*  400 */ (31, 31), (25, 50), (-17, 120), (-20, 112),
    /*  404 */ (-18, 114), (-11, 85), (-15, 92), (-14, 89),
    /*  408 */ (-26, 71), (-15, 81), (-14, 80), (0, 68),
    /*  412 */ (-14, 70), (-24, 56), (-23, 68), (-24, 50),
    /*  416 */ (-11, 74), (23, -13), (26, -13), (40, -15),
    /*  420 */ (49, -14), (44, 3), (45, 6), (44, 34),
    /*  424 */ (33, 54), (19, 82), (-3, 75), (-1, 23),
    /*  428 */ (1, 34), (1, 43), (0, 54), (-2, 55),
    /*  432 */ (0, 61), (1, 64), (0, 68), (-9, 92),
    /*  436 */ (-14, 106), (-13, 97), (-15, 90), (-12, 90),
    /*  440 */ (-18, 88), (-10, 73), (-9, 79), (-14, 86),
    /*  444 */ (-10, 73), (-10, 70), (-10, 69), (-5, 66),
    /*  448 */ (-9, 64), (-5, 58), (2, 59), (21, -10),
    /*  452 */ (24, -11), (28, -8), (28, -1), (29, 3),
    /*  456 */ (29, 9), (35, 20), (29, 36), (14, 67),
    /*  460 */ (-17, 123), (-12, 115), (-16, 122), (-11, 115),
    /*  464 */ (-12, 63), (-2, 68), (-15, 84), (-13, 104),
    /*  468 */ (-3, 70), (-8, 93), (-10, 90), (-30, 127),
    /*  472 */ (-17, 123), (-12, 115), (-16, 122), (-11, 115),
    /*  476 */ (-12, 63), (-2, 68), (-15, 84), (-13, 104),
    /*  480 */ (-3, 70), (-8, 93), (-10, 90), (-30, 127),
    /*  484 */ (-7, 93), (-11, 87), (-3, 77), (-5, 71),
    /*  488 */ (-4, 63), (-4, 68), (-12, 84), (-7, 62),
    /*  492 */ (-7, 65), (8, 61), (5, 56), (-2, 66),
    /*  496 */ (1, 64), (0, 61), (-2, 78), (1, 50),
    /*  500 */ (7, 52), (10, 35), (0, 44), (11, 38),
    /*  504 */ (1, 45), (0, 46), (5, 44), (31, 17),
    /*  508 */ (1, 51), (7, 50), (28, 19), (16, 33),
    /*  512 */ (14, 62), (-13, 108), (-15, 100), (-13, 101),
    /*  516 */ (-13, 91), (-12, 94), (-10, 88), (-16, 84),
    /*  520 */ (-10, 86), (-7, 83), (-13, 87), (-19, 94),
    /*  524 */ (1, 70), (0, 72), (-5, 74), (18, 59),
    /*  528 */ (-7, 93), (-11, 87), (-3, 77), (-5, 71),
    /*  532 */ (-4, 63), (-4, 68), (-12, 84), (-7, 62),
    /*  536 */ (-7, 65), (8, 61), (5, 56), (-2, 66),
    /*  540 */ (1, 64), (0, 61), (-2, 78), (1, 50),
    /*  544 */ (7, 52), (10, 35), (0, 44), (11, 38),
    /*  548 */ (1, 45), (0, 46), (5, 44), (31, 17),
    /*  552 */ (1, 51), (7, 50), (28, 19), (16, 33),
    /*  556 */ (14, 62), (-13, 108), (-15, 100), (-13, 101),
    /*  560 */ (-13, 91), (-12, 94), (-10, 88), (-16, 84),
    /*  564 */ (-10, 86), (-7, 83), (-13, 87), (-19, 94),
    /*  568 */ (1, 70), (0, 72), (-5, 74), (18, 59),
    /*  572 */ (24, 0), (15, 9), (8, 25), (13, 18),
    /*  576 */ (15, 9), (13, 19), (10, 37), (12, 18),
    /*  580 */ (6, 29), (20, 33), (15, 30), (4, 45),
    /*  584 */ (1, 58), (0, 62), (7, 61), (12, 38),
    /*  588 */ (11, 45), (15, 39), (11, 42), (13, 44),
    /*  592 */ (16, 45), (12, 41), (10, 49), (30, 34),
    /*  596 */ (18, 42), (10, 55), (17, 51), (17, 46),
    /*  600 */ (0, 89), (26, -19), (22, -17), (26, -17),
    /*  604 */ (30, -25), (28, -20), (33, -23), (37, -27),
    /*  608 */ (33, -23), (40, -28), (38, -17), (33, -11),
    /*  612 */ (40, -15), (41, -6), (38, 1), (41, 17),
    /*  616 */ (24, 0), (15, 9), (8, 25), (13, 18),
    /*  620 */ (15, 9), (13, 19), (10, 37), (12, 18),
    /*  624 */ (6, 29), (20, 33), (15, 30), (4, 45),
    /*  628 */ (1, 58), (0, 62), (7, 61), (12, 38),
    /*  632 */ (11, 45), (15, 39), (11, 42), (13, 44),
    /*  636 */ (16, 45), (12, 41), (10, 49), (30, 34),
    /*  640 */ (18, 42), (10, 55), (17, 51), (17, 46),
    /*  644 */ (0, 89), (26, -19), (22, -17), (26, -17),
    /*  648 */ (30, -25), (28, -20), (33, -23), (37, -27),
    /*  652 */ (33, -23), (40, -28), (38, -17), (33, -11),
    /*  656 */ (40, -15), (41, -6), (38, 1), (41, 17),
    /*  660 */ (-17, 120), (-20, 112), (-18, 114), (-11, 85),
    /*  664 */ (-15, 92), (-14, 89), (-26, 71), (-15, 81),
    /*  668 */ (-14, 80), (0, 68), (-14, 70), (-24, 56),
    /*  672 */ (-23, 68), (-24, 50), (-11, 74), (-14, 106),
    /*  676 */ (-13, 97), (-15, 90), (-12, 90), (-18, 88),
    /*  680 */ (-10, 73), (-9, 79), (-14, 86), (-10, 73),
    /*  684 */ (-10, 70), (-10, 69), (-5, 66), (-9, 64),
    /*  688 */ (-5, 58), (2, 59), (23, -13), (26, -13),
    /*  692 */ (40, -15), (49, -14), (44, 3), (45, 6),
    /*  696 */ (44, 34), (33, 54), (19, 82), (21, -10),
    /*  700 */ (24, -11), (28, -8), (28, -1), (29, 3),
    /*  704 */ (29, 9), (35, 20), (29, 36), (14, 67),
    /*  708 */ (-3, 75), (-1, 23), (1, 34), (1, 43),
    /*  712 */ (0, 54), (-2, 55), (0, 61), (1, 64),
    /*  716 */ (0, 68), (-9, 92), (-17, 120), (-20, 112),
    /*  720 */ (-18, 114), (-11, 85), (-15, 92), (-14, 89),
    /*  724 */ (-26, 71), (-15, 81), (-14, 80), (0, 68),
    /*  728 */ (-14, 70), (-24, 56), (-23, 68), (-24, 50),
    /*  732 */ (-11, 74), (-14, 106), (-13, 97), (-15, 90),
    /*  736 */ (-12, 90), (-18, 88), (-10, 73), (-9, 79),
    /*  740 */ (-14, 86), (-10, 73), (-10, 70), (-10, 69),
    /*  744 */ (-5, 66), (-9, 64), (-5, 58), (2, 59),
    /*  748 */ (23, -13), (26, -13), (40, -15), (49, -14),
    /*  752 */ (44, 3), (45, 6), (44, 34), (33, 54),
    /*  756 */ (19, 82), (21, -10), (24, -11), (28, -8),
    /*  760 */ (28, -1), (29, 3), (29, 9), (35, 20),
    /*  764 */ (29, 36), (14, 67), (-3, 75), (-1, 23),
    /*  768 */ (1, 34), (1, 43), (0, 54), (-2, 55),
    /*  772 */ (0, 61), (1, 64), (0, 68), (-9, 92),
    /*  776 */ (-6, 93), (-6, 84), (-8, 79), (0, 66),
    /*  780 */ (-1, 71), (0, 62), (-2, 60), (-2, 59),
    /*  784 */ (-5, 75), (-3, 62), (-4, 58), (-9, 66),
    /*  788 */ (-1, 79), (0, 71), (3, 68), (10, 44),
    /*  792 */ (-7, 62), (15, 36), (14, 40), (16, 27),
    /*  796 */ (12, 29), (1, 44), (20, 36), (18, 32),
    /*  800 */ (5, 42), (1, 48), (10, 62), (17, 46),
    /*  804 */ (9, 64), (-12, 104), (-11, 97), (-16, 96),
    /*  808 */ (-7, 88), (-8, 85), (-7, 85), (-9, 85),
    /*  812 */ (-13, 88), (4, 66), (-3, 77), (-3, 76),
    /*  816 */ (-6, 76), (10, 58), (-1, 76), (-1, 83),
    /*  820 */ (-6, 93), (-6, 84), (-8, 79), (0, 66),
    /*  824 */ (-1, 71), (0, 62), (-2, 60), (-2, 59),
    /*  828 */ (-5, 75), (-3, 62), (-4, 58), (-9, 66),
    /*  832 */ (-1, 79), (0, 71), (3, 68), (10, 44),
    /*  836 */ (-7, 62), (15, 36), (14, 40), (16, 27),
    /*  840 */ (12, 29), (1, 44), (20, 36), (18, 32),
    /*  844 */ (5, 42), (1, 48), (10, 62), (17, 46),
    /*  848 */ (9, 64), (-12, 104), (-11, 97), (-16, 96),
    /*  852 */ (-7, 88), (-8, 85), (-7, 85), (-9, 85),
    /*  856 */ (-13, 88), (4, 66), (-3, 77), (-3, 76),
    /*  860 */ (-6, 76), (10, 58), (-1, 76), (-1, 83),
    /*  864 */ (15, 6), (6, 19), (7, 16), (12, 14),
    /*  868 */ (18, 13), (13, 11), (13, 15), (15, 16),
    /*  872 */ (12, 23), (13, 23), (15, 20), (14, 26),
    /*  876 */ (14, 44), (17, 40), (17, 47), (24, 17),
    /*  880 */ (21, 21), (25, 22), (31, 27), (22, 29),
    /*  884 */ (19, 35), (14, 50), (10, 57), (7, 63),
    /*  888 */ (-2, 77), (-4, 82), (-3, 94), (9, 69),
    /*  892 */ (-12, 109), (36, -35), (36, -34), (32, -26),
    /*  896 */ (37, -30), (44, -32), (34, -18), (34, -15),
    /*  900 */ (40, -15), (33, -7), (35, -5), (33, 0),
    /*  904 */ (38, 2), (33, 13), (23, 35), (13, 58),
    /*  908 */ (15, 6), (6, 19), (7, 16), (12, 14),
    /*  912 */ (18, 13), (13, 11), (13, 15), (15, 16),
    /*  916 */ (12, 23), (13, 23), (15, 20), (14, 26),
    /*  920 */ (14, 44), (17, 40), (17, 47), (24, 17),
    /*  924 */ (21, 21), (25, 22), (31, 27), (22, 29),
    /*  928 */ (19, 35), (14, 50), (10, 57), (7, 63),
    /*  932 */ (-2, 77), (-4, 82), (-3, 94), (9, 69),
    /*  936 */ (-12, 109), (36, -35), (36, -34), (32, -26),
    /*  940 */ (37, -30), (44, -32), (34, -18), (34, -15),
    /*  944 */ (40, -15), (33, -7), (35, -5), (33, 0),
    /*  948 */ (38, 2), (33, 13), (23, 35), (13, 58),
    /*  952 */ (-3, 71), (-6, 42), (-5, 50), (-3, 54),
    /*  956 */ (-2, 62), (0, 58), (1, 63), (-2, 72),
    /*  960 */ (-1, 74), (-9, 91), (-5, 67), (-5, 27),
    /*  964 */ (-3, 39), (-2, 44), (0, 46), (-16, 64),
    /*  968 */ (-8, 68), (-10, 78), (-6, 77), (-10, 86),
    /*  972 */ (-12, 92), (-15, 55), (-10, 60), (-6, 62),
    /*  976 */ (-4, 65), (-12, 73), (-8, 76), (-7, 80),
    /*  980 */ (-9, 88), (-17, 110), (-3, 71), (-6, 42),
    /*  984 */ (-5, 50), (-3, 54), (-2, 62), (0, 58),
    /*  988 */ (1, 63), (-2, 72), (-1, 74), (-9, 91),
    /*  992 */ (-5, 67), (-5, 27), (-3, 39), (-2, 44),
    /*  996 */ (0, 46), (-16, 64), (-8, 68), (-10, 78),
    /* 1000 */ (-6, 77), (-10, 86), (-12, 92), (-15, 55),
    /* 1004 */ (-10, 60), (-6, 62), (-4, 65), (-12, 73),
    /* 1008 */ (-8, 76), (-7, 80), (-9, 88), (-17, 110),
    /* 1012 */ (-3, 70), (-8, 93), (-10, 90), (-30, 127),
    /* 1016 */ (-3, 70), (-8, 93), (-10, 90), (-30, 127),
    /* 1020 */ (-3, 70), (-8, 93), (-10, 90), (-30, 127),
];

/// Values used for P, SP and B slices, indexed by `cabac_init_idc`.
#[rustfmt::skip]
pub(crate) static INIT_PB: [[(i8, i8); 1024]; 3] = [
    // cabac_init_idc = 0
    [
        /*    0 */ (20, -15), (2, 54), (3, 74), (20, -15),
        /*    4 */ (2, 54), (3, 74), (-28, 127), (-23, 104),
        /*    8 */ (-6, 53), (-1, 54), (7, 51), (23, 33),
        /*   12 */ (23, 2), (21, 0), (1, 9), (0, 49),
        /*   16 */ (-37, 118), (5, 57), (-13, 78), (-11, 65),
        /*   20 */ (1, 62), (12, 49), (-4, 73), (17, 50),
        /*   24 */ (18, 64), (9, 43), (29, 0), (26, 67),
        /*   28 */ (16, 90), (9, 104), (-46, 127), (-20, 104),
        /*   32 */ (1, 67), (-13, 78), (-11, 65), (1, 62),
        /*   36 */ (-6, 86), (-17, 95), (-6, 61), (9, 45),
        /*   40 */ (-3, 69), (-6, 81), (-11, 96), (6, 55),
        /*   44 */ (7, 67), (-5, 86), (2, 88), (0, 58),
        /*   48 */ (-3, 76), (-10, 94), (5, 54), (4, 69),
        /*   52 */ (-3, 81), (0, 88), (-7, 67), (-5, 74),
        /*   56 */ (-4, 74), (-5, 80), (-7, 72), (1, 58),
        /*   60 */ (0, 41), (0, 63), (0, 63), (0, 63),
        /*   64 */ (-9, 83), (4, 86), (0, 97), (-7, 72),
        /*   68 */ (13, 41), (3, 62), (0, 45), (-4, 78),
        /*   72 */ (-3, 96), (-27, 126), (-28, 98), (-25, 101),
        /*   76 */ (-23, 67), (-28, 82), (-20, 94), (-16, 83),
        /*   80 */ (-22, 110), (-21, 91), (-18, 102), (-13, 93),
        /*   84 */ (-29, 127), (-7, 92), (-5, 89), (-7, 96),
        /*   88 */ (-13, 108), (-3, 46), (-1, 65), (-1, 57),
        /*   92 */ (-9, 93), (-3, 74), (-9, 92), (-8, 87),
        /*   96 */ (-23, 126), (5, 54), (6, 60), (6, 59),
        /*  100 */ (6, 69), (-1, 48), (0, 68), (-4, 69),
        /*  104 */ (-8, 88), (-2, 85), (-6, 78), (-1, 75),
        /*  108 */ (-7, 77), (2, 54), (5, 50), (-3, 68),
        /*  112 */ (1, 50), (6, 42), (-4, 81), (1, 63),
        /*  116 */ (-4, 70), (0, 67), (2, 57), (-2, 76),
        /*  120 */ (11, 35), (4, 64), (1, 61), (11, 35),
        /*  124 */ (18, 25), (12, 24), (13, 29), (13, 36),
        /*  128 */ (-10, 93), (-7, 73), (-2, 73), (13, 46),
        /*  132 */ (9, 49), (-7, 100), (9, 53), (2, 53),
        /*  136 */ (5, 53), (-2, 61), (0, 56), (0, 56),
        /*  140 */ (-13, 63), (-5, 60), (-1, 62), (4, 57),
        /*  144 */ (-6, 69), (4, 57), (14, 39), (4, 51),
        /*  148 */ (13, 68), (3, 64), (1, 61), (9, 63),
        /*  152 */ (7, 50), (16, 39), (5, 44), (4, 52),
        /*  156 */ (11, 48), (-5, 60), (-1, 59), (0, 59),
        /*  160 */ (22, 33), (5, 44), (14, 43), (-1, 78),
        /*  164 */ (0, 60), (9, 69), (11, 28), (2, 40),
        /*  168 */ (3, 44), (0, 49), (0, 46), (2, 44),
        /*  172 */ (2, 51), (0, 47), (4, 39), (2, 62),
        /*  176 */ (6, 46), (0, 54), (3, 54), (2, 58),
        /*  180 */ (4, 63), (6, 51), (6, 57), (7, 53),
        /*  184 */ (6, 52), (6, 55), (11, 45), (14, 36),
        /*  188 */ (8, 53), (-1, 82), (7, 55), (-3, 78),
        /*  192 */ (15, 46), (22, 31), (-1, 84), (25, 7),
        /*  196 */ (30, -7), (28, 3), (28, 4), (32, 0),
        /*  200 */ (34, -1), (30, 6), (30, 6), (32, 9),
        /*  204 */ (31, 19), (26, 27), (26, 30), (37, 20),
        /*  208 */ (28, 34), (17, 70), (1, 67), (5, 59),
        /*  212 */ (9, 67), (16, 30), (18, 32), (18, 35),
        /*  216 */ (22, 29), (24, 31), (23, 38), (18, 43),
        /*  220 */ (20, 41), (11, 63), (9, 59), (9, 64),
        /*  224 */ (-1, 94), (-2, 89), (-9, 108), (-6, 76),
        /*  228 */ (-2, 44), (0, 45), (0, 52), (-3, 64),
        /*  232 */ (-2, 59), (-4, 70), (-4, 75), (-8, 82),
        /*  236 */ (-17, 102), (-9, 77), (3, 24), (0, 42),
        /*  240 */ (0, 48), (0, 55), (-6, 59), (-7, 71),
        /*  244 */ (-12, 83), (-11, 87), (-30, 119), (1, 58),
        /*  248 */ (-3, 29), (-1, 36), (1, 38), (2, 43),
        /*  252 */ (-6, 55), (0, 58), (0, 64), (-3, 74),
        /*  256 */ (-10, 90), (0, 70), (-4, 29), (5, 31),
        /*  260 */ (7, 42), (1, 59), (-2, 58), (-3, 72),
        /*  264 */ (-3, 81), (-11, 97), (0, 58), (8, 5),
        /*  268 */ (10, 14), (14, 18), (13, 27), (2, 40),
        /*  272 */ (0, 58), (-3, 70), (-6, 79), (-8, 85),
        /*  276 */ NA, (-13, 106), (-16, 106), (-10, 87),
        /*  280 */ (-21, 114), (-18, 110), (-14, 98), (-22, 110),
        /*  284 */ (-21, 106), (-18, 103), (-21, 107), (-23, 108),
        /*  288 */ (-26, 112), (-10, 96), (-12, 95), (-5, 91),
        /*  292 */ (-9, 93), (-22, 94), (-5, 86), (9, 67),
        /*  296 */ (-4, 80), (-10, 85), (-1, 70), (7, 60),
        /*  300 */ (9, 58), (5, 61), (12, 50), (15, 50),
        /*  304 */ (18, 49), (17, 54), (10, 41), (7, 46),
        /*  308 */ (-1, 51), (7, 49), (8, 52), (9, 41),
        /*  312 */ (6, 47), (2, 55), (13, 41), (10, 44),
        /*  316 */ (6, 50), (5, 53), (13, 49), (4, 63),
        /*  320 */ (6, 64), (-2, 69), (-2, 59), (6, 70),
        /*  324 */ (10, 44), (9, 31), (12, 43), (3, 53),
        /*  328 */ (14, 50), (10, 44), (8, 52), (12, 40),
        /*  332 */ (17, 43), (20, 38), (13, 50), (8, 56),
        /*  336 */ (22, 40), (18, 56), (14, 11), (11, 14),
        /*  340 */ (9, 11), (18, 11), (21, 9), (23, -2),
        /*  344 */ (32, -15), (32, -15), (34, -21), (39, -23),
        /*  348 */ (42, -33), (41, -31), (46, -28), (38, -12),
        /*  352 */ (21, 29), (45, -24), (53, -45), (48, -26),
        /*  356 */ (65, -43), (43, -19), (39, -10), (30, 9),
        /*  360 */ (18, 26), (20, 27), (0, 57), (-14, 82),
        /*  364 */ (-5, 75), (-19, 97), (-35, 125), (27, 0),
        /*  368 */ (28, 0), (31, -4), (27, 6), (34, 8),
        /*  372 */ (30, 10), (24, 22), (33, 19), (22, 32),
        /*  376 */ (26, 31), (21, 41), (26, 44), (23, 47),
        /*  380 */ (16, 65), (14, 71), (8, 60), (6, 63),
        /*  384 */ (17, 65), (21, 24), (23, 20), (26, 23),
        /*  388 */ (27, 32), (28, 23), (28, 24), (23, 40),
        /*  392 */ (24, 32), (28, 29), (23, 42), (19, 57),
        /*  396 */ (22, 53), (22, 61), (11, 86), (12, 40),
        /*  400 */ (11, 51), (14, 59), (-4, 79), (-7, 71),
        /*  404 */ (-5, 69), (-9, 70), (-8, 66), (-10, 68),
        /*  408 */ (-19, 73), (-12, 69), (-16, 70), (-15, 67),
        /*  412 */ (-20, 62), (-19, 70), (-16, 66), (-22, 65),
        /*  416 */ (-20, 63), (9, -2), (26, -9), (33, -9),
        /*  420 */ (39, -7), (41, -2), (45, 3), (49, 9),
        /*  424 */ (45, 27), (36, 59), (-6, 66), (-7, 35),
        /*  428 */ (-7, 42), (-8, 45), (-5, 48), (-12, 56),
        /*  432 */ (-6, 60), (-5, 62), (-8, 66), (-8, 76),
        /*  436 */ (-5, 85), (-6, 81), (-10, 77), (-7, 81),
        /*  440 */ (-17, 80), (-18, 73), (-4, 74), (-10, 83),
        /*  444 */ (-9, 71), (-9, 67), (-1, 61), (-8, 66),
        /*  448 */ (-14, 66), (0, 59), (2, 59), (21, -13),
        /*  452 */ (33, -14), (39, -7), (46, -2), (51, 2),
        /*  456 */ (60, 6), (61, 17), (55, 34), (42, 62),
        /*  460 */ (-7, 92), (-5, 89), (-7, 96), (-13, 108),
        /*  464 */ (-3, 46), (-1, 65), (-1, 57), (-9, 93),
        /*  468 */ (-3, 74), (-9, 92), (-8, 87), (-23, 126),
        /*  472 */ (-7, 92), (-5, 89), (-7, 96), (-13, 108),
        /*  476 */ (-3, 46), (-1, 65), (-1, 57), (-9, 93),
        /*  480 */ (-3, 74), (-9, 92), (-8, 87), (-23, 126),
        /*  484 */ (-2, 85), (-6, 78), (-1, 75), (-7, 77),
        /*  488 */ (2, 54), (5, 50), (-3, 68), (1, 50),
        /*  492 */ (6, 42), (-4, 81), (1, 63), (-4, 70),
        /*  496 */ (0, 67), (2, 57), (-2, 76), (11, 35),
        /*  500 */ (4, 64), (1, 61), (11, 35), (18, 25),
        /*  504 */ (12, 24), (13, 29), (13, 36), (-10, 93),
        /*  508 */ (-7, 73), (-2, 73), (13, 46), (9, 49),
        /*  512 */ (-7, 100), (9, 53), (2, 53), (5, 53),
        /*  516 */ (-2, 61), (0, 56), (0, 56), (-13, 63),
        /*  520 */ (-5, 60), (-1, 62), (4, 57), (-6, 69),
        /*  524 */ (4, 57), (14, 39), (4, 51), (13, 68),
        /*  528 */ (-2, 85), (-6, 78), (-1, 75), (-7, 77),
        /*  532 */ (2, 54), (5, 50), (-3, 68), (1, 50),
        /*  536 */ (6, 42), (-4, 81), (1, 63), (-4, 70),
        /*  540 */ (0, 67), (2, 57), (-2, 76), (11, 35),
        /*  544 */ (4, 64), (1, 61), (11, 35), (18, 25),
        /*  548 */ (12, 24), (13, 29), (13, 36), (-10, 93),
        /*  552 */ (-7, 73), (-2, 73), (13, 46), (9, 49),
        /*  556 */ (-7, 100), (9, 53), (2, 53), (5, 53),
        /*  560 */ (-2, 61), (0, 56), (0, 56), (-13, 63),
        /*  564 */ (-5, 60), (-1, 62), (4, 57), (-6, 69),
        /*  568 */ (4, 57), (14, 39), (4, 51), (13, 68),
        /*  572 */ (11, 28), (2, 40), (3, 44), (0, 49),
        /*  576 */ (0, 46), (2, 44), (2, 51), (0, 47),
        /*  580 */ (4, 39), (2, 62), (6, 46), (0, 54),
        /*  584 */ (3, 54), (2, 58), (4, 63), (6, 51),
        /*  588 */ (6, 57), (7, 53), (6, 52), (6, 55),
        /*  592 */ (11, 45), (14, 36), (8, 53), (-1, 82),
        /*  596 */ (7, 55), (-3, 78), (15, 46), (22, 31),
        /*  600 */ (-1, 84), (25, 7), (30, -7), (28, 3),
        /*  604 */ (28, 4), (32, 0), (34, -1), (30, 6),
        /*  608 */ (30, 6), (32, 9), (31, 19), (26, 27),
        /*  612 */ (26, 30), (37, 20), (28, 34), (17, 70),
        /*  616 */ (11, 28), (2, 40), (3, 44), (0, 49),
        /*  620 */ (0, 46), (2, 44), (2, 51), (0, 47),
        /*  624 */ (4, 39), (2, 62), (6, 46), (0, 54),
        /*  628 */ (3, 54), (2, 58), (4, 63), (6, 51),
        /*  632 */ (6, 57), (7, 53), (6, 52), (6, 55),
        /*  636 */ (11, 45), (14, 36), (8, 53), (-1, 82),
        /*  640 */ (7, 55), (-3, 78), (15, 46), (22, 31),
        /*  644 */ (-1, 84), (25, 7), (30, -7), (28, 3),
        /*  648 */ (28, 4), (32, 0), (34, -1), (30, 6),
        /*  652 */ (30, 6), (32, 9), (31, 19), (26, 27),
        /*  656 */ (26, 30), (37, 20), (28, 34), (17, 70),
        /*  660 */ (-4, 79), (-7, 71), (-5, 69), (-9, 70),
        /*  664 */ (-8, 66), (-10, 68), (-19, 73), (-12, 69),
        /*  668 */ (-16, 70), (-15, 67), (-20, 62), (-19, 70),
        /*  672 */ (-16, 66), (-22, 65), (-20, 63), (-5, 85),
        /*  676 */ (-6, 81), (-10, 77), (-7, 81), (-17, 80),
        /*  680 */ (-18, 73), (-4, 74), (-10, 83), (-9, 71),
        /*  684 */ (-9, 67), (-1, 61), (-8, 66), (-14, 66),
        /*  688 */ (0, 59), (2, 59), (9, -2), (26, -9),
        /*  692 */ (33, -9), (39, -7), (41, -2), (45, 3),
        /*  696 */ (49, 9), (45, 27), (36, 59), (21, -13),
        /*  700 */ (33, -14), (39, -7), (46, -2), (51, 2),
        /*  704 */ (60, 6), (61, 17), (55, 34), (42, 62),
        /*  708 */ (-6, 66), (-7, 35), (-7, 42), (-8, 45),
        /*  712 */ (-5, 48), (-12, 56), (-6, 60), (-5, 62),
        /*  716 */ (-8, 66), (-8, 76), (-4, 79), (-7, 71),
        /*  720 */ (-5, 69), (-9, 70), (-8, 66), (-10, 68),
        /*  724 */ (-19, 73), (-12, 69), (-16, 70), (-15, 67),
        /*  728 */ (-20, 62), (-19, 70), (-16, 66), (-22, 65),
        /*  732 */ (-20, 63), (-5, 85), (-6, 81), (-10, 77),
        /*  736 */ (-7, 81), (-17, 80), (-18, 73), (-4, 74),
        /*  740 */ (-10, 83), (-9, 71), (-9, 67), (-1, 61),
        /*  744 */ (-8, 66), (-14, 66), (0, 59), (2, 59),
        /*  748 */ (9, -2), (26, -9), (33, -9), (39, -7),
        /*  752 */ (41, -2), (45, 3), (49, 9), (45, 27),
        /*  756 */ (36, 59), (21, -13), (33, -14), (39, -7),
        /*  760 */ (46, -2), (51, 2), (60, 6), (61, 17),
        /*  764 */ (55, 34), (42, 62), (-6, 66), (-7, 35),
        /*  768 */ (-7, 42), (-8, 45), (-5, 48), (-12, 56),
        /*  772 */ (-6, 60), (-5, 62), (-8, 66), (-8, 76),
        /*  776 */ (-13, 106), (-16, 106), (-10, 87), (-21, 114),
        /*  780 */ (-18, 110), (-14, 98), (-22, 110), (-21, 106),
        /*  784 */ (-18, 103), (-21, 107), (-23, 108), (-26, 112),
        /*  788 */ (-10, 96), (-12, 95), (-5, 91), (-9, 93),
        /*  792 */ (-22, 94), (-5, 86), (9, 67), (-4, 80),
        /*  796 */ (-10, 85), (-1, 70), (7, 60), (9, 58),
        /*  800 */ (5, 61), (12, 50), (15, 50), (18, 49),
        /*  804 */ (17, 54), (10, 41), (7, 46), (-1, 51),
        /*  808 */ (7, 49), (8, 52), (9, 41), (6, 47),
        /*  812 */ (2, 55), (13, 41), (10, 44), (6, 50),
        /*  816 */ (5, 53), (13, 49), (4, 63), (6, 64),
        /*  820 */ (-13, 106), (-16, 106), (-10, 87), (-21, 114),
        /*  824 */ (-18, 110), (-14, 98), (-22, 110), (-21, 106),
        /*  828 */ (-18, 103), (-21, 107), (-23, 108), (-26, 112),
        /*  832 */ (-10, 96), (-12, 95), (-5, 91), (-9, 93),
        /*  836 */ (-22, 94), (-5, 86), (9, 67), (-4, 80),
        /*  840 */ (-10, 85), (-1, 70), (7, 60), (9, 58),
        /*  844 */ (5, 61), (12, 50), (15, 50), (18, 49),
        /*  848 */ (17, 54), (10, 41), (7, 46), (-1, 51),
        /*  852 */ (7, 49), (8, 52), (9, 41), (6, 47),
        /*  856 */ (2, 55), (13, 41), (10, 44), (6, 50),
        /*  860 */ (5, 53), (13, 49), (4, 63), (6, 64),
        /*  864 */ (14, 11), (11, 14), (9, 11), (18, 11),
        /*  868 */ (21, 9), (23, -2), (32, -15), (32, -15),
        /*  872 */ (34, -21), (39, -23), (42, -33), (41, -31),
        /*  876 */ (46, -28), (38, -12), (21, 29), (45, -24),
        /*  880 */ (53, -45), (48, -26), (65, -43), (43, -19),
        /*  884 */ (39, -10), (30, 9), (18, 26), (20, 27),
        /*  888 */ (0, 57), (-14, 82), (-5, 75), (-19, 97),
        /*  892 */ (-35, 125), (27, 0), (28, 0), (31, -4),
        /*  896 */ (27, 6), (34, 8), (30, 10), (24, 22),
        /*  900 */ (33, 19), (22, 32), (26, 31), (21, 41),
        /*  904 */ (26, 44), (23, 47), (16, 65), (14, 71),
        /*  908 */ (14, 11), (11, 14), (9, 11), (18, 11),
        /*  912 */ (21, 9), (23, -2), (32, -15), (32, -15),
        /*  916 */ (34, -21), (39, -23), (42, -33), (41, -31),
        /*  920 */ (46, -28), (38, -12), (21, 29), (45, -24),
        /*  924 */ (53, -45), (48, -26), (65, -43), (43, -19),
        /*  928 */ (39, -10), (30, 9), (18, 26), (20, 27),
        /*  932 */ (0, 57), (-14, 82), (-5, 75), (-19, 97),
        /*  936 */ (-35, 125), (27, 0), (28, 0), (31, -4),
        /*  940 */ (27, 6), (34, 8), (30, 10), (24, 22),
        /*  944 */ (33, 19), (22, 32), (26, 31), (21, 41),
        /*  948 */ (26, 44), (23, 47), (16, 65), (14, 71),
        /*  952 */ (-6, 76), (-2, 44), (0, 45), (0, 52),
        /*  956 */ (-3, 64), (-2, 59), (-4, 70), (-4, 75),
        /*  960 */ (-8, 82), (-17, 102), (-9, 77), (3, 24),
        /*  964 */ (0, 42), (0, 48), (0, 55), (-6, 59),
        /*  968 */ (-7, 71), (-12, 83), (-11, 87), (-30, 119),
        /*  972 */ (1, 58), (-3, 29), (-1, 36), (1, 38),
        /*  976 */ (2, 43), (-6, 55), (0, 58), (0, 64),
        /*  980 */ (-3, 74), (-10, 90), (-6, 76), (-2, 44),
        /*  984 */ (0, 45), (0, 52), (-3, 64), (-2, 59),
        /*  988 */ (-4, 70), (-4, 75), (-8, 82), (-17, 102),
        /*  992 */ (-9, 77), (3, 24), (0, 42), (0, 48),
        /*  996 */ (0, 55), (-6, 59), (-7, 71), (-12, 83),
        /* 1000 */ (-11, 87), (-30, 119), (1, 58), (-3, 29),
        /* 1004 */ (-1, 36), (1, 38), (2, 43), (-6, 55),
        /* 1008 */ (0, 58), (0, 64), (-3, 74), (-10, 90),
        /* 1012 */ (-3, 74), (-9, 92), (-8, 87), (-23, 126),
        /* 1016 */ (-3, 74), (-9, 92), (-8, 87), (-23, 126),
        /* 1020 */ (-3, 74), (-9, 92), (-8, 87), (-23, 126),
    ],
    // cabac_init_idc = 1
    [
        /*    0 */ (20, -15), (2, 54), (3, 74), (20, -15),
        /*    4 */ (2, 54), (3, 74), (-28, 127), (-23, 104),
        /*    8 */ (-6, 53), (-1, 54), (7, 51), (22, 25),
        /*   12 */ (34, 0), (16, 0), (-2, 9), (4, 41),
        /*   16 */ (-29, 118), (2, 65), (-6, 71), (-13, 79),
        /*   20 */ (5, 52), (9, 50), (-3, 70), (10, 54),
        /*   24 */ (26, 34), (19, 22), (40, 0), (57, 2),
        /*   28 */ (41, 36), (26, 69), (-45, 127), (-15, 101),
        /*   32 */ (-4, 76), (-6, 71), (-13, 79), (5, 52),
        /*   36 */ (6, 69), (-13, 90), (0, 52), (8, 43),
        /*   40 */ (-2, 69), (-5, 82), (-10, 96), (2, 59),
        /*   44 */ (2, 75), (-3, 87), (-3, 100), (1, 56),
        /*   48 */ (-3, 74), (-6, 85), (0, 59), (-3, 81),
        /*   52 */ (-7, 86), (-5, 95), (-1, 66), (-1, 77),
        /*   56 */ (1, 70), (-2, 86), (-5, 72), (0, 61),
        /*   60 */ (0, 41), (0, 63), (0, 63), (0, 63),
        /*   64 */ (-9, 83), (4, 86), (0, 97), (-7, 72),
        /*   68 */ (13, 41), (3, 62), (13, 15), (7, 51),
        /*   72 */ (2, 80), (-39, 127), (-18, 91), (-17, 96),
        /*   76 */ (-26, 81), (-35, 98), (-24, 102), (-23, 97),
        /*   80 */ (-27, 119), (-24, 99), (-21, 110), (-18, 102),
        /*   84 */ (-36, 127), (0, 80), (-5, 89), (-7, 94),
        /*   88 */ (-4, 92), (0, 39), (0, 65), (-15, 84),
        /*   92 */ (-35, 127), (-2, 73), (-12, 104), (-9, 91),
        /*   96 */ (-31, 127), (3, 55), (7, 56), (7, 55),
        /*  100 */ (8, 61), (-3, 53), (0, 68), (-7, 74),
        /*  104 */ (-9, 88), (-13, 103), (-13, 91), (-9, 89),
        /*  108 */ (-14, 92), (-8, 76), (-12, 87), (-23, 110),
        /*  112 */ (-24, 105), (-10, 78), (-20, 112), (-17, 99),
        /*  116 */ (-78, 127), (-70, 127), (-50, 127), (-46, 127),
        /*  120 */ (-4, 66), (-5, 78), (-4, 71), (-8, 72),
        /*  124 */ (2, 59), (-1, 55), (-7, 70), (-6, 75),
        /*  128 */ (-8, 89), (-34, 119), (-3, 75), (32, 20),
        /*  132 */ (30, 22), (-44, 127), (0, 54), (-5, 61),
        /*  136 */ (0, 58), (-1, 60), (-3, 61), (-8, 67),
        /*  140 */ (-25, 84), (-14, 74), (-5, 65), (5, 52),
        /*  144 */ (2, 57), (0, 61), (-9, 69), (-11, 70),
        /*  148 */ (18, 55), (-4, 71), (0, 58), (7, 61),
        /*  152 */ (9, 41), (18, 25), (9, 32), (5, 43),
        /*  156 */ (9, 47), (0, 44), (0, 51), (2, 46),
        /*  160 */ (19, 38), (-4, 66), (15, 38), (12, 42),
        /*  164 */ (9, 34), (0, 89), (4, 45), (10, 28),
        /*  168 */ (10, 31), (33, -11), (52, -43), (18, 15),
        /*  172 */ (28, 0), (35, -22), (38, -25), (34, 0),
        /*  176 */ (39, -18), (32, -12), (102, -94), (0, 0),
        /*  180 */ (56, -15), (33, -4), (29, 10), (37, -5),
        /*  184 */ (51, -29), (39, -9), (52, -34), (69, -58),
        /*  188 */ (67, -63), (44, -5), (32, 7), (55, -29),
        /*  192 */ (32, 1), (0, 0), (27, 36), (33, -25),
        /*  196 */ (34, -30), (36, -28), (38, -28), (38, -27),
        /*  200 */ (34, -18), (35, -16), (34, -14), (32, -8),
        /*  204 */ (37, -6), (35, 0), (30, 10), (28, 18),
        /*  208 */ (26, 25), (29, 41), (0, 75), (2, 72),
        /*  212 */ (8, 77), (14, 35), (18, 31), (17, 35),
        /*  216 */ (21, 30), (17, 45), (20, 42), (18, 45),
        /*  220 */ (27, 26), (16, 54), (7, 66), (16, 56),
        /*  224 */ (11, 73), (10, 67), (-10, 116), (-23, 112),
        /*  228 */ (-15, 71), (-7, 61), (0, 53), (-5, 66),
        /*  232 */ (-11, 77), (-9, 80), (-9, 84), (-10, 87),
        /*  236 */ (-34, 127), (-21, 101), (-3, 39), (-5, 53),
        /*  240 */ (-7, 61), (-11, 75), (-15, 77), (-17, 91),
        /*  244 */ (-25, 107), (-25, 111), (-28, 122), (-11, 76),
        /*  248 */ (-10, 44), (-10, 52), (-10, 57), (-9, 58),
        /*  252 */ (-16, 72), (-7, 69), (-4, 69), (-5, 74),
        /*  256 */ (-9, 86), (2, 66), (-9, 34), (1, 32),
        /*  260 */ (11, 31), (5, 52), (-2, 55), (-2, 67),
        /*  264 */ (0, 73), (-8, 89), (3, 52), (7, 4),
        /*  268 */ (10, 8), (17, 8), (16, 19), (3, 37),
        /*  272 */ (-1, 61), (-5, 73), (-1, 70), (4, 78),
        /*  276 */ NA, (-21, 126), (-23, 124), (-20, 110),
        /*  280 */ (-26, 126), (-25, 124), (-17, 105), (-27, 121),
        /*  284 */ (-27, 117), (-17, 102), (-26, 117), (-27, 116),
        /*  288 */ (-33, 122), (-10, 95), (-14, 100), (-8, 95),
        /*  292 */ (-17, 111), (-28, 114), (-6, 89), (-2, 80),
        /*  296 */ (-4, 82), (-9, 85), (-8, 81), (-1, 72),
        /*  300 */ (5, 64), (1, 67), (9, 56), (0, 69),
        /*  304 */ (1, 69), (7, 69), (-7, 69), (-6, 67),
        /*  308 */ (-16, 77), (-2, 64), (2, 61), (-6, 67),
        /*  312 */ (-3, 64), (2, 57), (-3, 65), (-3, 66),
        /*  316 */ (0, 62), (9, 51), (-1, 66), (-2, 71),
        /*  320 */ (-2, 75), (-1, 70), (-9, 72), (14, 60),
        /*  324 */ (16, 37), (0, 47), (18, 35), (11, 37),
        /*  328 */ (12, 41), (10, 41), (2, 48), (12, 41),
        /*  332 */ (13, 41), (0, 59), (3, 50), (19, 40),
        /*  336 */ (3, 66), (18, 50), (19, -6), (18, -6),
        /*  340 */ (14, 0), (26, -12), (31, -16), (33, -25),
        /*  344 */ (33, -22), (37, -28), (39, -30), (42, -30),
        /*  348 */ (47, -42), (45, -36), (49, -34), (41, -17),
        /*  352 */ (32, 9), (69, -71), (63, -63), (66, -64),
        /*  356 */ (77, -74), (54, -39), (52, -35), (41, -10),
        /*  360 */ (36, 0), (40, -1), (30, 14), (28, 26),
        /*  364 */ (23, 37), (12, 55), (11, 65), (37, -33),
        /*  368 */ (39, -36), (40, -37), (38, -30), (46, -33),
        /*  372 */ (42, -30), (40, -24), (49, -29), (38, -12),
        /*  376 */ (40, -10), (38, -3), (46, -5), (31, 20),
        /*  380 */ (29, 30), (25, 44), (12, 48), (11, 49),
        /*  384 */ (26, 45), (22, 22), (23, 22), (27, 21),
        /*  388 */ (33, 20), (26, 28), (30, 24), (27, 34),
        /*  392 */ (18, 42), (25, 39), (18, 50), (12, 70),
        /*  396 */ (21, 54), (14, 71), (11, 83), (25, 32),
        /*  400 */ (21, 49), (21, 54), (-5, 85), (-6, 81),
        /*  404 */ (-10, 77), (-7, 81), (-17, 80), (-18, 73),
        /*  408 */ (-4, 74), (-10, 83), (-9, 71), (-9, 67),
        /*  412 */ (-1, 61), (-8, 66), (-14, 66), (0, 59),
        /*  416 */ (2, 59), (21, -13), (33, -14), (39, -7),
        /*  420 */ (46, -2), (51, 2), (60, 6), (61, 17),
        /*  424 */ (55, 34), (42, 62), (-9, 71), (-7, 37),
        /*  428 */ (-8, 44), (-11, 49), (-10, 56), (-12, 59),
        /*  432 */ (-8, 63), (-9, 67), (-6, 68), (-10, 79),
        /*  436 */ (-3, 78), (-8, 74), (-9, 72), (-10, 72),
        /*  440 */ (-18, 75), (-12, 71), (-11, 63), (-5, 70),
        /*  444 */ (-17, 75), (-14, 72), (-16, 67), (-8, 53),
        /*  448 */ (-14, 59), (-9, 52), (-11, 68), (9, -2),
        /*  452 */ (30, -10), (31, -4), (33, -1), (33, 7),
        /*  456 */ (31, 12), (37, 23), (31, 38), (20, 64),
        /*  460 */ (0, 80), (-5, 89), (-7, 94), (-4, 92),
        /*  464 */ (0, 39), (0, 65), (-15, 84), (-35, 127),
        /*  468 */ (-2, 73), (-12, 104), (-9, 91), (-31, 127),
        /*  472 */ (0, 80), (-5, 89), (-7, 94), (-4, 92),
        /*  476 */ (0, 39), (0, 65), (-15, 84), (-35, 127),
        /*  480 */ (-2, 73), (-12, 104), (-9, 91), (-31, 127),
        /*  484 */ (-13, 103), (-13, 91), (-9, 89), (-14, 92),
        /*  488 */ (-8, 76), (-12, 87), (-23, 110), (-24, 105),
        /*  492 */ (-10, 78), (-20, 112), (-17, 99), (-78, 127),
        /*  496 */ (-70, 127), (-50, 127), (-46, 127), (-4, 66),
        /*  500 */ (-5, 78), (-4, 71), (-8, 72), (2, 59),
        /*  504 */ (-1, 55), (-7, 70), (-6, 75), (-8, 89),
        /*  508 */ (-34, 119), (-3, 75), (32, 20), (30, 22),
        /*  512 */ (-44, 127), (0, 54), (-5, 61), (0, 58),
        /*  516 */ (-1, 60), (-3, 61), (-8, 67), (-25, 84),
        /*  520 */ (-14, 74), (-5, 65), (5, 52), (2, 57),
        /*  524 */ (0, 61), (-9, 69), (-11, 70), (18, 55),
        /*  528 */ (-13, 103), (-13, 91), (-9, 89), (-14, 92),
        /*  532 */ (-8, 76), (-12, 87), (-23, 110), (-24, 105),
        /*  536 */ (-10, 78), (-20, 112), (-17, 99), (-78, 127),
        /*  540 */ (-70, 127), (-50, 127), (-46, 127), (-4, 66),
        /*  544 */ (-5, 78), (-4, 71), (-8, 72), (2, 59),
        /*  548 */ (-1, 55), (-7, 70), (-6, 75), (-8, 89),
        /*  552 */ (-34, 119), (-3, 75), (32, 20), (30, 22),
        /*  556 */ (-44, 127), (0, 54), (-5, 61), (0, 58),
        /*  560 */ (-1, 60), (-3, 61), (-8, 67), (-25, 84),
        /*  564 */ (-14, 74), (-5, 65), (5, 52), (2, 57),
        /*  568 */ (0, 61), (-9, 69), (-11, 70), (18, 55),
        /*  572 */ (4, 45), (10, 28), (10, 31), (33, -11),
        /*  576 */ (52, -43), (18, 15), (28, 0), (35, -22),
        /*  580 */ (38, -25), (34, 0), (39, -18), (32, -12),
        /*  584 */ (102, -94), (0, 0), (56, -15), (33, -4),
        /*  588 */ (29, 10), (37, -5), (51, -29), (39, -9),
        /*  592 */ (52, -34), (69, -58), (67, -63), (44, -5),
        /*  596 */ (32, 7), (55, -29), (32, 1), (0, 0),
        /*  600 */ (27, 36), (33, -25), (34, -30), (36, -28),
        /*  604 */ (38, -28), (38, -27), (34, -18), (35, -16),
        /*  608 */ (34, -14), (32, -8), (37, -6), (35, 0),
        /*  612 */ (30, 10), (28, 18), (26, 25), (29, 41),
        /*  616 */ (4, 45), (10, 28), (10, 31), (33, -11),
        /*  620 */ (52, -43), (18, 15), (28, 0), (35, -22),
        /*  624 */ (38, -25), (34, 0), (39, -18), (32, -12),
        /*  628 */ (102, -94), (0, 0), (56, -15), (33, -4),
        /*  632 */ (29, 10), (37, -5), (51, -29), (39, -9),
        /*  636 */ (52, -34), (69, -58), (67, -63), (44, -5),
        /*  640 */ (32, 7), (55, -29), (32, 1), (0, 0),
        /*  644 */ (27, 36), (33, -25), (34, -30), (36, -28),
        /*  648 */ (38, -28), (38, -27), (34, -18), (35, -16),
        /*  652 */ (34, -14), (32, -8), (37, -6), (35, 0),
        /*  656 */ (30, 10), (28, 18), (26, 25), (29, 41),
        /*  660 */ (-5, 85), (-6, 81), (-10, 77), (-7, 81),
        /*  664 */ (-17, 80), (-18, 73), (-4, 74), (-10, 83),
        /*  668 */ (-9, 71), (-9, 67), (-1, 61), (-8, 66),
        /*  672 */ (-14, 66), (0, 59), (2, 59), (-3, 78),
        /*  676 */ (-8, 74), (-9, 72), (-10, 72), (-18, 75),
        /*  680 */ (-12, 71), (-11, 63), (-5, 70), (-17, 75),
        /*  684 */ (-14, 72), (-16, 67), (-8, 53), (-14, 59),
        /*  688 */ (-9, 52), (-11, 68), (21, -13), (33, -14),
        /*  692 */ (39, -7), (46, -2), (51, 2), (60, 6),
        /*  696 */ (61, 17), (55, 34), (42, 62), (9, -2),
        /*  700 */ (30, -10), (31, -4), (33, -1), (33, 7),
        /*  704 */ (31, 12), (37, 23), (31, 38), (20, 64),
        /*  708 */ (-9, 71), (-7, 37), (-8, 44), (-11, 49),
        /*  712 */ (-10, 56), (-12, 59), (-8, 63), (-9, 67),
        /*  716 */ (-6, 68), (-10, 79), (-5, 85), (-6, 81),
        /*  720 */ (-10, 77), (-7, 81), (-17, 80), (-18, 73),
        /*  724 */ (-4, 74), (-10, 83), (-9, 71), (-9, 67),
        /*  728 */ (-1, 61), (-8, 66), (-14, 66), (0, 59),
        /*  732 */ (2, 59), (-3, 78), (-8, 74), (-9, 72),
        /*  736 */ (-10, 72), (-18, 75), (-12, 71), (-11, 63),
        /*  740 */ (-5, 70), (-17, 75), (-14, 72), (-16, 67),
        /*  744 */ (-8, 53), (-14, 59), (-9, 52), (-11, 68),
        /*  748 */ (21, -13), (33, -14), (39, -7), (46, -2),
        /*  752 */ (51, 2), (60, 6), (61, 17), (55, 34),
        /*  756 */ (42, 62), (9, -2), (30, -10), (31, -4),
        /*  760 */ (33, -1), (33, 7), (31, 12), (37, 23),
        /*  764 */ (31, 38), (20, 64), (-9, 71), (-7, 37),
        /*  768 */ (-8, 44), (-11, 49), (-10, 56), (-12, 59),
        /*  772 */ (-8, 63), (-9, 67), (-6, 68), (-10, 79),
        /*  776 */ (-21, 126), (-23, 124), (-20, 110), (-26, 126),
        /*  780 */ (-25, 124), (-17, 105), (-27, 121), (-27, 117),
        /*  784 */ (-17, 102), (-26, 117), (-27, 116), (-33, 122),
        /*  788 */ (-10, 95), (-14, 100), (-8, 95), (-17, 111),
        /*  792 */ (-28, 114), (-6, 89), (-2, 80), (-4, 82),
        /*  796 */ (-9, 85), (-8, 81), (-1, 72), (5, 64),
        /*  800 */ (1, 67), (9, 56), (0, 69), (1, 69),
        /*  804 */ (7, 69), (-7, 69), (-6, 67), (-16, 77),
        /*  808 */ (-2, 64), (2, 61), (-6, 67), (-3, 64),
        /*  812 */ (2, 57), (-3, 65), (-3, 66), (0, 62),
        /*  816 */ (9, 51), (-1, 66), (-2, 71), (-2, 75),
        /*  820 */ (-21, 126), (-23, 124), (-20, 110), (-26, 126),
        /*  824 */ (-25, 124), (-17, 105), (-27, 121), (-27, 117),
        /*  828 */ (-17, 102), (-26, 117), (-27, 116), (-33, 122),
        /*  832 */ (-10, 95), (-14, 100), (-8, 95), (-17, 111),
        /*  836 */ (-28, 114), (-6, 89), (-2, 80), (-4, 82),
        /*  840 */ (-9, 85), (-8, 81), (-1, 72), (5, 64),
        /*  844 */ (1, 67), (9, 56), (0, 69), (1, 69),
        /*  848 */ (7, 69), (-7, 69), (-6, 67), (-16, 77),
        /*  852 */ (-2, 64), (2, 61), (-6, 67), (-3, 64),
        /*  856 */ (2, 57), (-3, 65), (-3, 66), (0, 62),
        /*  860 */ (9, 51), (-1, 66), (-2, 71), (-2, 75),
        /*  864 */ (19, -6), (18, -6), (14, 0), (26, -12),
        /*  868 */ (31, -16), (33, -25), (33, -22), (37, -28),
        /*  872 */ (39, -30), (42, -30), (47, -42), (45, -36),
        /*  876 */ (49, -34), (41, -17), (32, 9), (69, -71),
        /*  880 */ (63, -63), (66, -64), (77, -74), (54, -39),
        /*  884 */ (52, -35), (41, -10), (36, 0), (40, -1),
        /*  888 */ (30, 14), (28, 26), (23, 37), (12, 55),
        /*  892 */ (11, 65), (37, -33), (39, -36), (40, -37),
        /*  896 */ (38, -30), (46, -33), (42, -30), (40, -24),
        /*  900 */ (49, -29), (38, -12), (40, -10), (38, -3),
        /*  904 */ (46, -5), (31, 20), (29, 30), (25, 44),
        /*  908 */ (19, -6), (18, -6), (14, 0), (26, -12),
        /*  912 */ (31, -16), (33, -25), (33, -22), (37, -28),
        /*  916 */ (39, -30), (42, -30), (47, -42), (45, -36),
        /*  920 */ (49, -34), (41, -17), (32, 9), (69, -71),
        /*  924 */ (63, -63), (66, -64), (77, -74), (54, -39),
        /*  928 */ (52, -35), (41, -10), (36, 0), (40, -1),
        /*  932 */ (30, 14), (28, 26), (23, 37), (12, 55),
        /*  936 */ (11, 65), (37, -33), (39, -36), (40, -37),
        /*  940 */ (38, -30), (46, -33), (42, -30), (40, -24),
        /*  944 */ (49, -29), (38, -12), (40, -10), (38, -3),
        /*  948 */ (46, -5), (31, 20), (29, 30), (25, 44),
        /*  952 */ (-23, 112), (-15, 71), (-7, 61), (0, 53),
        /*  956 */ (-5, 66), (-11, 77), (-9, 80), (-9, 84),
        /*  960 */ (-10, 87), (-34, 127), (-21, 101), (-3, 39),
        /*  964 */ (-5, 53), (-7, 61), (-11, 75), (-15, 77),
        /*  968 */ (-17, 91), (-25, 107), (-25, 111), (-28, 122),
        /*  972 */ (-11, 76), (-10, 44), (-10, 52), (-10, 57),
        /*  976 */ (-9, 58), (-16, 72), (-7, 69), (-4, 69),
        /*  980 */ (-5, 74), (-9, 86), (-23, 112), (-15, 71),
        /*  984 */ (-7, 61), (0, 53), (-5, 66), (-11, 77),
        /*  988 */ (-9, 80), (-9, 84), (-10, 87), (-34, 127),
        /*  992 */ (-21, 101), (-3, 39), (-5, 53), (-7, 61),
        /*  996 */ (-11, 75), (-15, 77), (-17, 91), (-25, 107),
        /* 1000 */ (-25, 111), (-28, 122), (-11, 76), (-10, 44),
        /* 1004 */ (-10, 52), (-10, 57), (-9, 58), (-16, 72),
        /* 1008 */ (-7, 69), (-4, 69), (-5, 74), (-9, 86),
        /* 1012 */ (-2, 73), (-12, 104), (-9, 91), (-31, 127),
        /* 1016 */ (-2, 73), (-12, 104), (-9, 91), (-31, 127),
        /* 1020 */ (-2, 73), (-12, 104), (-9, 91), (-31, 127),
    ],
    // cabac_init_idc = 2
    [
        /*    0 */ (20, -15), (2, 54), (3, 74), (20, -15),
        /*    4 */ (2, 54), (3, 74), (-28, 127), (-23, 104),
        /*    8 */ (-6, 53), (-1, 54), (7, 51), (29, 16),
        /*   12 */ (25, 0), (14, 0), (-10, 51), (-3, 62),
        /*   16 */ (-27, 99), (26, 16), (-4, 85), (-24, 102),
        /*   20 */ (5, 57), (6, 57), (-17, 73), (14, 57),
        /*   24 */ (20, 40), (20, 10), (29, 0), (54, 0),
        /*   28 */ (37, 42), (12, 97), (-32, 127), (-22, 117),
        /*   32 */ (-2, 74), (-4, 85), (-24, 102), (5, 57),
        /*   36 */ (-6, 93), (-14, 88), (-6, 44), (4, 55),
        /*   40 */ (-11, 89), (-15, 103), (-21, 116), (19, 57),
        /*   44 */ (20, 58), (4, 84), (6, 96), (1, 63),
        /*   48 */ (-5, 85), (-13, 106), (5, 63), (6, 75),
        /*   52 */ (-3, 90), (-1, 101), (3, 55), (-4, 79),
        /*   56 */ (-2, 75), (-12, 97), (-7, 50), (1, 60),
        /*   60 */ (0, 41), (0, 63), (0, 63), (0, 63),
        /*   64 */ (-9, 83), (4, 86), (0, 97), (-7, 72),
        /*   68 */ (13, 41), (3, 62), (7, 34), (-9, 88),
        /*   72 */ (-20, 127), (-36, 127), (-17, 91), (-14, 95),
        /*   76 */ (-25, 84), (-25, 86), (-12, 89), (-17, 91),
        /*   80 */ (-31, 127), (-14, 76), (-18, 103), (-13, 90),
        /*   84 */ (-37, 127), (11, 80), (5, 76), (2, 84),
        /*   88 */ (5, 78), (-6, 55), (4, 61), (-14, 83),
        /*   92 */ (-37, 127), (-5, 79), (-11, 104), (-11, 91),
        /*   96 */ (-30, 127), (0, 65), (-2, 79), (0, 72),
        /*  100 */ (-4, 92), (-6, 56), (3, 68), (-8, 71),
        /*  104 */ (-13, 98), (-4, 86), (-12, 88), (-5, 82),
        /*  108 */ (-3, 72), (-4, 67), (-8, 72), (-16, 89),
        /*  112 */ (-9, 69), (-1, 59), (5, 66), (4, 57),
        /*  116 */ (-4, 71), (-2, 71), (2, 58), (-1, 74),
        /*  120 */ (-4, 44), (-1, 69), (0, 62), (-7, 51),
        /*  124 */ (-4, 47), (-6, 42), (-3, 41), (-6, 53),
        /*  128 */ (8, 76), (-9, 78), (-11, 83), (9, 52),
        /*  132 */ (0, 67), (-5, 90), (1, 67), (-15, 72),
        /*  136 */ (-5, 75), (-8, 80), (-21, 83), (-21, 64),
        /*  140 */ (-13, 31), (-25, 64), (-29, 94), (9, 75),
        /*  144 */ (17, 63), (-8, 74), (-5, 35), (-2, 27),
        /*  148 */ (13, 91), (3, 65), (-7, 69), (8, 77),
        /*  152 */ (-10, 66), (3, 62), (-3, 68), (-20, 81),
        /*  156 */ (0, 30), (1, 7), (-3, 23), (-21, 74),
        /*  160 */ (16, 66), (-23, 124), (17, 37), (44, -18),
        /*  164 */ (50, -34), (-22, 127), (4, 39), (0, 42),
        /*  168 */ (7, 34), (11, 29), (8, 31), (6, 37),
        /*  172 */ (7, 42), (3, 40), (8, 33), (13, 43),
        /*  176 */ (13, 36), (4, 47), (3, 55), (2, 58),
        /*  180 */ (6, 60), (8, 44), (11, 44), (14, 42),
        /*  184 */ (7, 48), (4, 56), (4, 52), (13, 37),
        /*  188 */ (9, 49), (19, 58), (10, 48), (12, 45),
        /*  192 */ (0, 69), (20, 33), (8, 63), (35, -18),
        /*  196 */ (33, -25), (28, -3), (24, 10), (27, 0),
        /*  200 */ (34, -14), (52, -44), (39, -24), (19, 17),
        /*  204 */ (31, 25), (36, 29), (24, 33), (34, 15),
        /*  208 */ (30, 20), (22, 73), (20, 34), (19, 31),
        /*  212 */ (27, 44), (19, 16), (15, 36), (15, 36),
        /*  216 */ (21, 28), (25, 21), (30, 20), (31, 12),
        /*  220 */ (27, 16), (24, 42), (0, 93), (14, 56),
        /*  224 */ (15, 57), (26, 38), (-24, 127), (-24, 115),
        /*  228 */ (-22, 82), (-9, 62), (0, 53), (0, 59),
        /*  232 */ (-14, 85), (-13, 89), (-13, 94), (-11, 92),
        /*  236 */ (-29, 127), (-21, 100), (-14, 57), (-12, 67),
        /*  240 */ (-11, 71), (-10, 77), (-21, 85), (-16, 88),
        /*  244 */ (-23, 104), (-15, 98), (-37, 127), (-10, 82),
        /*  248 */ (-8, 48), (-8, 61), (-8, 66), (-7, 70),
        /*  252 */ (-14, 75), (-10, 79), (-9, 83), (-12, 92),
        /*  256 */ (-18, 108), (-4, 79), (-22, 69), (-16, 75),
        /*  260 */ (-2, 58), (1, 58), (-13, 78), (-9, 83),
        /*  264 */ (-4, 81), (-13, 99), (-13, 81), (-6, 38),
        /*  268 */ (-13, 62), (-6, 58), (-2, 59), (-16, 73),
        /*  272 */ (-10, 76), (-13, 86), (-9, 83), (-10, 87),
        /*  276 */ NA, (-22, 127), (-25, 127), (-25, 120),
        /*  280 */ (-27, 127), (-19, 114), (-23, 117), (-25, 118),
        /*  284 */ (-26, 117), (-24, 113), (-28, 118), (-31, 120),
        /*  288 */ (-37, 124), (-10, 94), (-15, 102), (-10, 99),
        /*  292 */ (-13, 106), (-50, 127), (-5, 92), (17, 57),
        /*  296 */ (-5, 86), (-13, 94), (-12, 91), (-2, 77),
        /*  300 */ (0, 71), (-1, 73), (4, 64), (-7, 81),
        /*  304 */ (5, 64), (15, 57), (1, 67), (0, 68),
        /*  308 */ (-10, 67), (1, 68), (0, 77), (2, 64),
        /*  312 */ (0, 68), (-5, 78), (7, 55), (5, 59),
        /*  316 */ (2, 65), (14, 54), (15, 44), (5, 60),
        /*  320 */ (2, 70), (-2, 76), (-18, 86), (12, 70),
        /*  324 */ (5, 64), (-12, 70), (11, 55), (5, 56),
        /*  328 */ (0, 69), (2, 65), (-6, 74), (5, 54),
        /*  332 */ (7, 54), (-6, 76), (-11, 82), (-2, 77),
        /*  336 */ (-2, 77), (25, 42), (17, -13), (16, -9),
        /*  340 */ (17, -12), (27, -21), (37, -30), (41, -40),
        /*  344 */ (42, -41), (48, -47), (39, -32), (46, -40),
        /*  348 */ (52, -51), (46, -41), (52, -39), (43, -19),
        /*  352 */ (32, 11), (61, -55), (56, -46), (62, -50),
        /*  356 */ (81, -67), (45, -20), (35, -2), (28, 15),
        /*  360 */ (34, 1), (39, 1), (30, 17), (20, 38),
        /*  364 */ (18, 45), (15, 54), (0, 79), (36, -16),
        /*  368 */ (37, -14), (37, -17), (32, 1), (34, 15),
        /*  372 */ (29, 15), (24, 25), (34, 22), (31, 16),
        /*  376 */ (35, 18), (31, 28), (33, 41), (36, 28),
        /*  380 */ (27, 47), (21, 62), (18, 31), (19, 26),
        /*  384 */ (36, 24), (24, 23), (27, 16), (24, 30),
        /*  388 */ (31, 29), (22, 41), (22, 42), (16, 60),
        /*  392 */ (15, 52), (14, 60), (3, 78), (-16, 123),
        /*  396 */ (21, 53), (22, 56), (25, 61), (21, 33),
        /*  400 */ (19, 50), (17, 61), (-3, 78), (-8, 74),
        /*  404 */ (-9, 72), (-10, 72), (-18, 75), (-12, 71),
        /*  408 */ (-11, 63), (-5, 70), (-17, 75), (-14, 72),
        /*  412 */ (-16, 67), (-8, 53), (-14, 59), (-9, 52),
        /*  416 */ (-11, 68), (9, -2), (30, -10), (31, -4),
        /*  420 */ (33, -1), (33, 7), (31, 12), (37, 23),
        /*  424 */ (31, 38), (20, 64), (-9, 71), (-7, 37),
        /*  428 */ (-8, 44), (-11, 49), (-10, 56), (-12, 59),
        /*  432 */ (-8, 63), (-9, 67), (-6, 68), (-10, 79),
        /*  436 */ (-3, 78), (-8, 74), (-9, 72), (-10, 72),
        /*  440 */ (-18, 75), (-12, 71), (-11, 63), (-5, 70),
        /*  444 */ (-17, 75), (-14, 72), (-16, 67), (-8, 53),
        /*  448 */ (-14, 59), (-9, 52), (-11, 68), (9, -2),
        /*  452 */ (30, -10), (31, -4), (33, -1), (33, 7),
        /*  456 */ (31, 12), (37, 23), (31, 38), (20, 64),
        /*  460 */ (11, 80), (5, 76), (2, 84), (5, 78),
        /*  464 */ (-6, 55), (4, 61), (-14, 83), (-37, 127),
        /*  468 */ (-5, 79), (-11, 104), (-11, 91), (-30, 127),
        /*  472 */ (11, 80), (5, 76), (2, 84), (5, 78),
        /*  476 */ (-6, 55), (4, 61), (-14, 83), (-37, 127),
        /*  480 */ (-5, 79), (-11, 104), (-11, 91), (-30, 127),
        /*  484 */ (-4, 86), (-12, 88), (-5, 82), (-3, 72),
        /*  488 */ (-4, 67), (-8, 72), (-16, 89), (-9, 69),
        /*  492 */ (-1, 59), (5, 66), (4, 57), (-4, 71),
        /*  496 */ (-2, 71), (2, 58), (-1, 74), (-4, 44),
        /*  500 */ (-1, 69), (0, 62), (-7, 51), (-4, 47),
        /*  504 */ (-6, 42), (-3, 41), (-6, 53), (8, 76),
        /*  508 */ (-9, 78), (-11, 83), (9, 52), (0, 67),
        /*  512 */ (-5, 90), (1, 67), (-15, 72), (-5, 75),
        /*  516 */ (-8, 80), (-21, 83), (-21, 64), (-13, 31),
        /*  520 */ (-25, 64), (-29, 94), (9, 75), (17, 63),
        /*  524 */ (-8, 74), (-5, 35), (-2, 27), (13, 91),
        /*  528 */ (-4, 86), (-12, 88), (-5, 82), (-3, 72),
        /*  532 */ (-4, 67), (-8, 72), (-16, 89), (-9, 69),
        /*  536 */ (-1, 59), (5, 66), (4, 57), (-4, 71),
        /*  540 */ (-2, 71), (2, 58), (-1, 74), (-4, 44),
        /*  544 */ (-1, 69), (0, 62), (-7, 51), (-4, 47),
        /*  548 */ (-6, 42), (-3, 41), (-6, 53), (8, 76),
        /*  552 */ (-9, 78), (-11, 83), (9, 52), (0, 67),
        /*  556 */ (-5, 90), (1, 67), (-15, 72), (-5, 75),
        /*  560 */ (-8, 80), (-21, 83), (-21, 64), (-13, 31),
        /*  564 */ (-25, 64), (-29, 94), (9, 75), (17, 63),
        /*  568 */ (-8, 74), (-5, 35), (-2, 27), (13, 91),
        /*  572 */ (4, 39), (0, 42), (7, 34), (11, 29),
        /*  576 */ (8, 31), (6, 37), (7, 42), (3, 40),
        /*  580 */ (8, 33), (13, 43), (13, 36), (4, 47),
        /*  584 */ (3, 55), (2, 58), (6, 60), (8, 44),
        /*  588 */ (11, 44), (14, 42), (7, 48), (4, 56),
        /*  592 */ (4, 52), (13, 37), (9, 49), (19, 58),
        /*  596 */ (10, 48), (12, 45), (0, 69), (20, 33),
        /*  600 */ (8, 63), (35, -18), (33, -25), (28, -3),
        /*  604 */ (24, 10), (27, 0), (34, -14), (52, -44),
        /*  608 */ (39, -24), (19, 17), (31, 25), (36, 29),
        /*  612 */ (24, 33), (34, 15), (30, 20), (22, 73),
        /*  616 */ (4, 39), (0, 42), (7, 34), (11, 29),
        /*  620 */ (8, 31), (6, 37), (7, 42), (3, 40),
        /*  624 */ (8, 33), (13, 43), (13, 36), (4, 47),
        /*  628 */ (3, 55), (2, 58), (6, 60), (8, 44),
        /*  632 */ (11, 44), (14, 42), (7, 48), (4, 56),
        /*  636 */ (4, 52), (13, 37), (9, 49), (19, 58),
        /*  640 */ (10, 48), (12, 45), (0, 69), (20, 33),
        /*  644 */ (8, 63), (35, -18), (33, -25), (28, -3),
        /*  648 */ (24, 10), (27, 0), (34, -14), (52, -44),
        /*  652 */ (39, -24), (19, 17), (31, 25), (36, 29),
        /*  656 */ (24, 33), (34, 15), (30, 20), (22, 73),
        /*  660 */ (-3, 78), (-8, 74), (-9, 72), (-10, 72),
        /*  664 */ (-18, 75), (-12, 71), (-11, 63), (-5, 70),
        /*  668 */ (-17, 75), (-14, 72), (-16, 67), (-8, 53),
        /*  672 */ (-14, 59), (-9, 52), (-11, 68), (-3, 78),
        /*  676 */ (-8, 74), (-9, 72), (-10, 72), (-18, 75),
        /*  680 */ (-12, 71), (-11, 63), (-5, 70), (-17, 75),
        /*  684 */ (-14, 72), (-16, 67), (-8, 53), (-14, 59),
        /*  688 */ (-9, 52), (-11, 68), (9, -2), (30, -10),
        /*  692 */ (31, -4), (33, -1), (33, 7), (31, 12),
        /*  696 */ (37, 23), (31, 38), (20, 64), (9, -2),
        /*  700 */ (30, -10), (31, -4), (33, -1), (33, 7),
        /*  704 */ (31, 12), (37, 23), (31, 38), (20, 64),
        /*  708 */ (-9, 71), (-7, 37), (-8, 44), (-11, 49),
        /*  712 */ (-10, 56), (-12, 59), (-8, 63), (-9, 67),
        /*  716 */ (-6, 68), (-10, 79), (-3, 78), (-8, 74),
        /*  720 */ (-9, 72), (-10, 72), (-18, 75), (-12, 71),
        /*  724 */ (-11, 63), (-5, 70), (-17, 75), (-14, 72),
        /*  728 */ (-16, 67), (-8, 53), (-14, 59), (-9, 52),
        /*  732 */ (-11, 68), (-3, 78), (-8, 74), (-9, 72),
        /*  736 */ (-10, 72), (-18, 75), (-12, 71), (-11, 63),
        /*  740 */ (-5, 70), (-17, 75), (-14, 72), (-16, 67),
        /*  744 */ (-8, 53), (-14, 59), (-9, 52), (-11, 68),
        /*  748 */ (9, -2), (30, -10), (31, -4), (33, -1),
        /*  752 */ (33, 7), (31, 12), (37, 23), (31, 38),
        /*  756 */ (20, 64), (9, -2), (30, -10), (31, -4),
        /*  760 */ (33, -1), (33, 7), (31, 12), (37, 23),
        /*  764 */ (31, 38), (20, 64), (-9, 71), (-7, 37),
        /*  768 */ (-8, 44), (-11, 49), (-10, 56), (-12, 59),
        /*  772 */ (-8, 63), (-9, 67), (-6, 68), (-10, 79),
        /*  776 */ (-22, 127), (-25, 127), (-25, 120), (-27, 127),
        /*  780 */ (-19, 114), (-23, 117), (-25, 118), (-26, 117),
        /*  784 */ (-24, 113), (-28, 118), (-31, 120), (-37, 124),
        /*  788 */ (-10, 94), (-15, 102), (-10, 99), (-13, 106),
        /*  792 */ (-50, 127), (-5, 92), (17, 57), (-5, 86),
        /*  796 */ (-13, 94), (-12, 91), (-2, 77), (0, 71),
        /*  800 */ (-1, 73), (4, 64), (-7, 81), (5, 64),
        /*  804 */ (15, 57), (1, 67), (0, 68), (-10, 67),
        /*  808 */ (1, 68), (0, 77), (2, 64), (0, 68),
        /*  812 */ (-5, 78), (7, 55), (5, 59), (2, 65),
        /*  816 */ (14, 54), (15, 44), (5, 60), (2, 70),
        /*  820 */ (-22, 127), (-25, 127), (-25, 120), (-27, 127),
        /*  824 */ (-19, 114), (-23, 117), (-25, 118), (-26, 117),
        /*  828 */ (-24, 113), (-28, 118), (-31, 120), (-37, 124),
        /*  832 */ (-10, 94), (-15, 102), (-10, 99), (-13, 106),
        /*  836 */ (-50, 127), (-5, 92), (17, 57), (-5, 86),
        /*  840 */ (-13, 94), (-12, 91), (-2, 77), (0, 71),
        /*  844 */ (-1, 73), (4, 64), (-7, 81), (5, 64),
        /*  848 */ (15, 57), (1, 67), (0, 68), (-10, 67),
        /*  852 */ (1, 68), (0, 77), (2, 64), (0, 68),
        /*  856 */ (-5, 78), (7, 55), (5, 59), (2, 65),
        /*  860 */ (14, 54), (15, 44), (5, 60), (2, 70),
        /*  864 */ (17, -13), (16, -9), (17, -12), (27, -21),
        /*  868 */ (37, -30), (41, -40), (42, -41), (48, -47),
        /*  872 */ (39, -32), (46, -40), (52, -51), (46, -41),
        /*  876 */ (52, -39), (43, -19), (32, 11), (61, -55),
        /*  880 */ (56, -46), (62, -50), (81, -67), (45, -20),
        /*  884 */ (35, -2), (28, 15), (34, 1), (39, 1),
        /*  888 */ (30, 17), (20, 38), (18, 45), (15, 54),
        /*  892 */ (0, 79), (36, -16), (37, -14), (37, -17),
        /*  896 */ (32, 1), (34, 15), (29, 15), (24, 25),
        /*  900 */ (34, 22), (31, 16), (35, 18), (31, 28),
        /*  904 */ (33, 41), (36, 28), (27, 47), (21, 62),
        /*  908 */ (17, -13), (16, -9), (17, -12), (27, -21),
        /*  912 */ (37, -30), (41, -40), (42, -41), (48, -47),
        /*  916 */ (39, -32), (46, -40), (52, -51), (46, -41),
        /*  920 */ (52, -39), (43, -19), (32, 11), (61, -55),
        /*  924 */ (56, -46), (62, -50), (81, -67), (45, -20),
        /*  928 */ (35, -2), (28, 15), (34, 1), (39, 1),
        /*  932 */ (30, 17), (20, 38), (18, 45), (15, 54),
        /*  936 */ (0, 79), (36, -16), (37, -14), (37, -17),
        /*  940 */ (32, 1), (34, 15), (29, 15), (24, 25),
        /*  944 */ (34, 22), (31, 16), (35, 18), (31, 28),
        /*  948 */ (33, 41), (36, 28), (27, 47), (21, 62),
        /*  952 */ (-24, 115), (-22, 82), (-9, 62), (0, 53),
        /*  956 */ (0, 59), (-14, 85), (-13, 89), (-13, 94),
        /*  960 */ (-11, 92), (-29, 127), (-21, 100), (-14, 57),
        /*  964 */ (-12, 67), (-11, 71), (-10, 77), (-21, 85),
        /*  968 */ (-16, 88), (-23, 104), (-15, 98), (-37, 127),
        /*  972 */ (-10, 82), (-8, 48), (-8, 61), (-8, 66),
        /*  976 */ (-7, 70), (-14, 75), (-10, 79), (-9, 83),
        /*  980 */ (-12, 92), (-18, 108), (-24, 115), (-22, 82),
        /*  984 */ (-9, 62), (0, 53), (0, 59), (-14, 85),
        /*  988 */ (-13, 89), (-13, 94), (-11, 92), (-29, 127),
        /*  992 */ (-21, 100), (-14, 57), (-12, 67), (-11, 71),
        /*  996 */ (-10, 77), (-21, 85), (-16, 88), (-23, 104),
        /* 1000 */ (-15, 98), (-37, 127), (-10, 82), (-8, 48),
        /* 1004 */ (-8, 61), (-8, 66), (-7, 70), (-14, 75),
        /* 1008 */ (-10, 79), (-9, 83), (-12, 92), (-18, 108),
        /* 1012 */ (-5, 79), (-11, 104), (-11, 91), (-30, 127),
        /* 1016 */ (-5, 79), (-11, 104), (-11, 91), (-30, 127),
        /* 1020 */ (-5, 79), (-11, 104), (-11, 91), (-30, 127),
    ],
];

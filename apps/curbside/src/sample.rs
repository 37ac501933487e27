//! Built-in survey extract used when no `--data` file is given.
//!
//! Morning deliveries on both sides of the street, in survey column order.
//! Rows are deliberately not sorted; the scenario builder orders them.

pub const SAMPLE_CSV: &str = "\
id,hora_a_la_que_comenz_el_parqueo,hora_a_la_que_finaliz_el_parqueo,sentido_de_la_calle_donde_estacion,tipo_de_vehculo,propsito_del_parqueo,nivel_de_disrupcin\n\
1,07:02,07:15,SUR-NORTE,2,1,1\n\
2,07:05,07:09,NORTE-SUR,4,2,0\n\
3,07:11,07:40,SUR-NORTE,1,1,3\n\
4,07:08,,NORTE-SUR,5,2,0\n\
5,07:20,07:31,NORTE-SUR,3,1,2\n\
6,07:24,07:26,SUR-NORTE,4,2,1\n\
7,07:33,07:52,SUR-NORTE,2,1,2\n\
8,07:35,07:38,NORTE-SUR,3,1,1\n\
9,07:47,,SUR-NORTE,4,2,0\n\
10,07:51,08:20,NORTE-SUR,1,1,3\n\
11,08:02,08:07,SUR-NORTE,5,2,0\n\
12,08:04,08:19,NORTE-SUR,2,1,2\n\
";
